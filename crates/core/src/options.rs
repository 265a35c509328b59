//! The option table: what the parser is allowed to recognize.

use std::fmt::{Display, Formatter};

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::warn;

use crate::about::{is_builtin_alias, is_builtin_name};
use crate::error::{Error, Result};
use crate::value::Binding;

/// The names an option answers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ids {
    pub long: String,
    pub alias: Option<char>,
}

impl Ids {
    /// A long name with a single-character alias. A `'\0'` alias means none.
    pub fn new(long: impl Into<String>, alias: char) -> Self {
        Self {
            long: long.into(),
            alias: (alias != '\0').then_some(alias),
        }
    }

    pub fn long(long: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            alias: None,
        }
    }

    /// An option reachable only through its alias.
    pub fn alias(alias: char) -> Self {
        Self::new(String::new(), alias)
    }

    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.alias.is_none()
    }
}

impl Display for Ids {
    /// Flag syntax as shown in help: `-i, --input`, `--input`, or `-n` for
    /// single-character names.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.alias, self.long.chars().count()) {
            (Some(alias), 0) => write!(formatter, "-{alias}"),
            (Some(alias), _) => write!(formatter, "-{alias}, --{}", self.long),
            (None, 1) => write!(formatter, "-{}", self.long),
            (None, _) => write!(formatter, "--{}", self.long),
        }
    }
}

/// One entry in the option table.
#[derive(Debug)]
pub struct OptionDescriptor<'a> {
    pub ids: Ids,
    pub binding: Binding<'a>,
    pub help: String,
    pub required: bool,
}

impl<'a> OptionDescriptor<'a> {
    pub fn new(ids: Ids, binding: impl Into<Binding<'a>>, help: impl Into<String>) -> Self {
        Self {
            ids,
            binding: binding.into(),
            help: help.into(),
            required: false,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The name used in log lines and error messages.
    pub fn display_name(&self) -> String {
        match self.ids.alias {
            Some(alias) if self.ids.long.is_empty() => format!("-{alias}"),
            _ => self.ids.long.clone(),
        }
    }
}

/// An ordered, validated table of options.
///
/// Declaration order is kept: it is the order of help output, and on an alias
/// collision the first declaration keeps the alias.
#[derive(Debug)]
pub struct Options<'a> {
    descriptors: Vec<OptionDescriptor<'a>>,
    names: IndexMap<String, usize>,
    aliases: IndexMap<char, usize>,
}

impl<'a> Options<'a> {
    /// Builds the table, validating every descriptor.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyIdentifier`] if a descriptor has neither a long name nor an alias
    /// - [`Error::DuplicateName`] if two descriptors share a long name
    ///
    /// # Examples
    ///
    /// ```
    /// use argz_core::options::{Ids, OptionDescriptor, Options};
    ///
    /// let mut input = String::new();
    /// let mut verbose = false;
    ///
    /// let options = Options::new(vec![
    ///     OptionDescriptor::new(Ids::new("input", 'i'), &mut input, "the input file").required(),
    ///     OptionDescriptor::new(Ids::long("verbose"), &mut verbose, "chatty output"),
    /// ])?;
    /// assert_eq!(options.find_alias('i'), options.find_long("input"));
    /// # Ok::<(), argz_core::error::Error>(())
    /// ```
    pub fn new(descriptors: Vec<OptionDescriptor<'a>>) -> Result<Self> {
        let mut names = IndexMap::new();
        let mut aliases: IndexMap<char, usize> = IndexMap::new();

        for (index, descriptor) in descriptors.iter().enumerate() {
            let ids = &descriptor.ids;
            if ids.is_empty() {
                return Err(Error::EmptyIdentifier);
            }

            if !ids.long.is_empty() {
                if names.contains_key(&ids.long) {
                    return Err(Error::DuplicateName(ids.long.clone()));
                }
                if is_builtin_name(&ids.long) {
                    warn!("Option `--{}` is shadowed by the built-in option", ids.long);
                }
                names.insert(ids.long.clone(), index);
            }

            if let Some(alias) = ids.alias {
                if is_builtin_alias(alias) {
                    warn!("Alias `-{alias}` of `{ids}` is shadowed by the built-in option");
                    continue;
                }
                match aliases.entry(alias) {
                    Entry::Occupied(claimed) => {
                        warn!(
                            "Alias `-{alias}` is already claimed by `{}`, ignoring it for `{}`",
                            descriptors[*claimed.get()].display_name(),
                            descriptor.display_name()
                        );
                    }
                    Entry::Vacant(free) => {
                        free.insert(index);
                    }
                }
            }
        }

        Ok(Self {
            descriptors,
            names,
            aliases,
        })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor<'a>> {
        self.descriptors.iter()
    }

    pub fn get(&self, index: usize) -> Option<&OptionDescriptor<'a>> {
        self.descriptors.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut OptionDescriptor<'a>> {
        self.descriptors.get_mut(index)
    }

    /// Index of the descriptor with this long name.
    pub fn find_long(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Index of the first descriptor declaring this alias. Aliases taken by the
    /// built-in help and version options are never listed.
    pub fn find_alias(&self, alias: char) -> Option<usize> {
        self.aliases.get(&alias).copied()
    }

    /// Declared aliases with the descriptor that owns each, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.aliases.iter().map(|(alias, index)| (*alias, *index))
    }
}

impl<'o, 'a> IntoIterator for &'o Options<'a> {
    type Item = &'o OptionDescriptor<'a>;
    type IntoIter = std::slice::Iter<'o, OptionDescriptor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identifier_fails_at_construction() {
        let mut flag = false;
        let result = Options::new(vec![OptionDescriptor::new(
            Ids::new("", '\0'),
            &mut flag,
            "nameless",
        )]);
        assert!(matches!(result, Err(Error::EmptyIdentifier)));
    }

    #[test]
    fn test_duplicate_long_name_is_rejected() {
        let mut first = String::new();
        let mut second = String::new();
        let result = Options::new(vec![
            OptionDescriptor::new(Ids::long("input"), &mut first, "first"),
            OptionDescriptor::new(Ids::long("input"), &mut second, "second"),
        ]);
        match result {
            Err(Error::DuplicateName(name)) => assert_eq!(name, "input"),
            other => panic!("Expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_alias_only_option_is_valid() {
        let mut level = 0u32;
        let options =
            Options::new(vec![OptionDescriptor::new(Ids::alias('l'), &mut level, "level")])
                .unwrap();
        assert_eq!(options.find_alias('l'), Some(0));
        assert_eq!(options.get(0).unwrap().display_name(), "-l");
    }

    #[test]
    fn test_alias_collision_first_declaration_wins() {
        let mut input = String::new();
        let mut include = String::new();
        let options = Options::new(vec![
            OptionDescriptor::new(Ids::new("input", 'i'), &mut input, "input"),
            OptionDescriptor::new(Ids::new("include", 'i'), &mut include, "include"),
        ])
        .unwrap();
        assert_eq!(options.find_alias('i'), Some(0));
        assert_eq!(options.find_long("include"), Some(1));
        assert_eq!(options.aliases().count(), 1);
    }

    #[test]
    fn test_builtin_aliases_are_not_claimed() {
        let mut host = String::new();
        let mut verbose = false;
        let options = Options::new(vec![
            OptionDescriptor::new(Ids::new("host", 'h'), &mut host, ""),
            OptionDescriptor::new(Ids::new("verbose", 'v'), &mut verbose, ""),
        ])
        .unwrap();
        assert_eq!(options.find_alias('h'), None);
        assert_eq!(options.find_alias('v'), None);
        assert_eq!(options.find_long("host"), Some(0));
        assert_eq!(options.aliases().count(), 0);
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let mut a = String::new();
        let mut b = 0i32;
        let mut c = false;
        let options = Options::new(vec![
            OptionDescriptor::new(Ids::long("zeta"), &mut a, ""),
            OptionDescriptor::new(Ids::long("alpha"), &mut b, ""),
            OptionDescriptor::new(Ids::long("mid"), &mut c, ""),
        ])
        .unwrap();
        let names: Vec<&str> = options.iter().map(|d| d.ids.long.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_flag_syntax() {
        assert_eq!(Ids::new("input", 'i').to_string(), "-i, --input");
        assert_eq!(Ids::long("number").to_string(), "--number");
        assert_eq!(Ids::long("n").to_string(), "-n");
        assert_eq!(Ids::alias('q').to_string(), "-q");
    }

    #[test]
    fn test_null_alias_means_none() {
        assert_eq!(Ids::new("input", '\0').alias, None);
        assert!(Ids::new("", '\0').is_empty());
    }
}
