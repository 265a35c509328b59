//! Program metadata shown in help and version output.

/// Long name of the built-in help option.
pub const HELP_NAME: &str = "help";
/// Long name of the built-in version option.
pub const VERSION_NAME: &str = "version";
/// Alias of the built-in help option.
pub const HELP_ALIAS: char = 'h';
/// Alias of the built-in version option.
pub const VERSION_ALIAS: char = 'v';

/// Description and version of the program being parsed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub description: String,
    pub version: String,
    /// Write help when no arguments follow the program name.
    pub help_on_empty: bool,
}

impl About {
    /// Creates metadata that writes help when the program is run without arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use argz_core::about::About;
    ///
    /// let about = About::new("My program description", "1.2.3");
    /// assert!(about.help_on_empty);
    ///
    /// let about = about.allow_empty();
    /// assert!(!about.help_on_empty);
    /// ```
    pub fn new(description: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            version: version.into(),
            help_on_empty: true,
        }
    }

    /// Running without any arguments is a valid invocation; do not write help for it.
    #[must_use]
    pub fn allow_empty(mut self) -> Self {
        self.help_on_empty = false;
        self
    }
}

pub(crate) fn is_builtin_name(name: &str) -> bool {
    name == HELP_NAME || name == VERSION_NAME
}

pub(crate) fn is_builtin_alias(alias: char) -> bool {
    alias == HELP_ALIAS || alias == VERSION_ALIAS
}
