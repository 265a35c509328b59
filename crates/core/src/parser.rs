//! The parsing engine.
//!
//! A single left-to-right scan over the argument vector with one token of
//! lookahead for option values. Index 0 is the program name and is skipped.
//!
//! Token rules:
//! - `--name` selects an option by long name, `-a` by alias (or by a
//!   one-character long name).
//! - The name ends at the first space; trailing spaces are ignored, anything
//!   else after them makes the flag malformed.
//! - A bare `-` or `--` ends option processing; later tokens are not read.
//! - Boolean options are switches. Every other option consumes the next token
//!   as its value, whatever it looks like.
//! - `-h`/`--help` and `-v`/`--version` are built in. They are written to the
//!   sink after the scan, and scanning carries on past them. Missing
//!   required options are still reported alongside them.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace, warn};

use crate::about::{About, HELP_ALIAS, HELP_NAME, VERSION_ALIAS, VERSION_NAME};
use crate::error::{Error, Result};
use crate::help;
use crate::options::Options;
use crate::sink::OutputSink;
use crate::value;

/// What a flag resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Target {
    Help,
    Version,
    Declared(usize),
}

/// Result of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub help_requested: bool,
    pub version_requested: bool,
    /// Required options that never appeared, in declaration order.
    pub missing: Vec<String>,
}

impl ParseOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Turns missing required options into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequired`] listing every missing option.
    pub fn require_all(self) -> Result<Self> {
        if self.missing.is_empty() {
            Ok(self)
        } else {
            Err(Error::MissingRequired(self.missing))
        }
    }
}

/// Alias lookup for one parse call: the built-ins first, then the table's aliases.
struct AliasTable(IndexMap<char, Target>);

impl AliasTable {
    fn build(options: &Options<'_>) -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert(HELP_ALIAS, Target::Help);
        aliases.insert(VERSION_ALIAS, Target::Version);

        for (alias, index) in options.aliases() {
            aliases.entry(alias).or_insert(Target::Declared(index));
        }

        Self(aliases)
    }

    fn get(&self, alias: char) -> Option<Target> {
        self.0.get(&alias).copied()
    }
}

/// Parses `args` against `options`, writing matched values into their bindings.
///
/// Values are applied as the scan goes, so on error every option before the
/// failing token has already been written.
///
/// # Errors
///
/// - [`Error::MalformedFlag`] for a token that does not start with `-`, starts
///   with three dashes, or is a multi-character single-dash flag
/// - [`Error::UnknownAlias`] / [`Error::UnknownOption`] for unrecognized flags
/// - [`Error::MissingValue`] when a valued option is the last token
/// - [`Error::InvalidNumber`] when a value does not fit a numeric option
/// - [`Error::Io`] when writing help or version text fails
///
/// Missing required options are not an error here; they are listed in
/// [`ParseOutcome::missing`]. Use [`ParseOutcome::require_all`] to escalate.
///
/// # Examples
///
/// ```
/// use argz_core::about::About;
/// use argz_core::options::{Ids, OptionDescriptor, Options};
/// use argz_core::parser::parse;
///
/// let about = About::new("demo", "1.0.0");
/// let mut input = String::new();
/// let mut verbose = false;
/// let mut options = Options::new(vec![
///     OptionDescriptor::new(Ids::new("input", 'i'), &mut input, "the input file").required(),
///     OptionDescriptor::new(Ids::long("verbose"), &mut verbose, "chatty output"),
/// ])?;
///
/// let mut out: Vec<u8> = Vec::new();
/// let outcome = parse(&about, &mut options, &["prog", "-i", "a.txt", "--verbose"], &mut out)?;
/// assert!(outcome.is_complete());
///
/// drop(options);
/// assert_eq!(input, "a.txt");
/// assert!(verbose);
/// # Ok::<(), argz_core::error::Error>(())
/// ```
pub fn parse<S, W>(
    about: &About,
    options: &mut Options<'_>,
    args: &[S],
    sink: &mut W,
) -> Result<ParseOutcome>
where
    S: AsRef<str>,
    W: OutputSink + ?Sized,
{
    let mut outcome = ParseOutcome::default();

    if args.len() <= 1 && about.help_on_empty {
        debug!("No arguments given, writing help");
        help::write_help(sink, about, options)?;
        outcome.help_requested = true;
        return Ok(outcome);
    }

    let aliases = AliasTable::build(options);
    let mut seen: IndexSet<Target> = IndexSet::new();

    let mut position = 1;
    while position < args.len() {
        let token = args[position].as_ref();
        let Some(target) = resolve(token, &aliases, options)? else {
            debug!("End of options at argument {position}");
            break;
        };

        if let Target::Declared(index) = target {
            let descriptor = options
                .get_mut(index)
                .ok_or_else(|| Error::UnknownOption(token.to_string()))?;
            let name = descriptor.display_name();

            if descriptor.binding.is_flag() {
                debug!("Switch `{name}` set");
                value::coerce(&mut descriptor.binding, &name, "true")?;
            } else {
                position += 1;
                let raw = args
                    .get(position)
                    .ok_or_else(|| Error::MissingValue(name.clone()))?
                    .as_ref();
                trace!("Option `{name}` given value \"{raw}\"");
                value::coerce(&mut descriptor.binding, &name, raw)?;
            }
        } else {
            debug!("Built-in {target:?} requested");
        }

        seen.insert(target);
        position += 1;
    }

    outcome.help_requested = seen.contains(&Target::Help);
    outcome.version_requested = seen.contains(&Target::Version);

    if outcome.help_requested {
        help::write_help(sink, about, options)?;
    }
    if outcome.version_requested {
        help::write_version(sink, about)?;
    }

    outcome.missing = options
        .iter()
        .enumerate()
        .filter(|(index, descriptor)| {
            descriptor.required && !seen.contains(&Target::Declared(*index))
        })
        .map(|(_, descriptor)| descriptor.display_name())
        .collect();

    if !outcome.missing.is_empty() {
        warn!("Required option(s) not provided: {}", outcome.missing.join(", "));
    }

    Ok(outcome)
}

/// Resolves one flag token. `None` is the end-of-options sentinel.
fn resolve(token: &str, aliases: &AliasTable, options: &Options<'_>) -> Result<Option<Target>> {
    let malformed = || Error::MalformedFlag(token.to_string());

    let Some(stripped) = token.strip_prefix('-') else {
        return Err(malformed());
    };
    let (is_long, body) = match stripped.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, stripped),
    };
    if is_long && body.starts_with('-') {
        return Err(malformed());
    }

    let name = flag_name(body).ok_or_else(malformed)?;
    if name.is_empty() {
        return Ok(None);
    }

    if is_long {
        let target = match name {
            HELP_NAME => Target::Help,
            VERSION_NAME => Target::Version,
            _ => options
                .find_long(name)
                .map(Target::Declared)
                .ok_or_else(|| Error::UnknownOption(name.to_string()))?,
        };
        return Ok(Some(target));
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(alias), None) => aliases
            .get(alias)
            .or_else(|| options.find_long(name).map(Target::Declared))
            .map(Some)
            .ok_or(Error::UnknownAlias(alias)),
        _ => Err(malformed()),
    }
}

/// The flag name: everything up to the first space. Returns `None` if
/// anything other than spaces follows it.
fn flag_name(body: &str) -> Option<&str> {
    match body.split_once(' ') {
        Some((name, rest)) if rest.trim_start_matches(' ').is_empty() => Some(name),
        Some(_) => None,
        None => Some(body),
    }
}
