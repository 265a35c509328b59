//! The demo option table.
//!
//! Mirrors a typical small tool: a required input file, an optional study file,
//! a number with a default, a switch, and optional-valued variants of each.

use argz_core::about::About;
use argz_core::error::Result;
use argz_core::help;
use argz_core::options::{Ids, OptionDescriptor, Options};
use argz_core::parser::{self, ParseOutcome};
use argz_core::sink::OutputSink;
use itertools::Itertools;
use log::debug;

/// Destinations bound by the demo table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub input: String,
    pub study: String,
    pub number: i32,
    pub boolean: bool,
    pub input_opt: Option<String>,
    pub study_opt: Option<String>,
    pub number_opt: Option<i32>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            input: String::new(),
            study: String::new(),
            number: 123,
            boolean: false,
            input_opt: None,
            study_opt: None,
            number_opt: None,
        }
    }
}

impl Demo {
    /// Builds the option table over this demo's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is invalid.
    pub fn options(&mut self) -> Result<Options<'_>> {
        Options::new(vec![
            OptionDescriptor::new(Ids::new("input", 'i'), &mut self.input, "the input file")
                .required(),
            OptionDescriptor::new(Ids::new("study", 's'), &mut self.study, "a study file"),
            OptionDescriptor::new(Ids::long("number"), &mut self.number, "input an int"),
            OptionDescriptor::new(Ids::long("boolean"), &mut self.boolean, "a boolean"),
            OptionDescriptor::new(Ids::long("input_opt"), &mut self.input_opt, "the input file"),
            OptionDescriptor::new(Ids::long("study_opt"), &mut self.study_opt, "a study file"),
            OptionDescriptor::new(Ids::long("number_opt"), &mut self.number_opt, "input an int"),
        ])
    }

    /// Parses `args` into this demo's fields.
    ///
    /// # Errors
    ///
    /// Returns the parser's error; fields set before the failing token keep their new values.
    pub fn parse<S, W>(&mut self, about: &About, args: &[S], sink: &mut W) -> Result<ParseOutcome>
    where
        S: AsRef<str>,
        W: OutputSink + ?Sized,
    {
        let mut options = self.options()?;
        let outcome = parser::parse(about, &mut options, args, sink)?;
        debug!("Parse outcome: {outcome:?}");
        Ok(outcome)
    }

    /// Writes the demo table's help.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to write.
    pub fn write_help<W: OutputSink + ?Sized>(&mut self, about: &About, sink: &mut W) -> Result<()> {
        let options = self.options()?;
        help::write_help(sink, about, &options)
    }

    /// `name = value` lines for every field; unset optionals show as `<none>`.
    pub fn summary_lines(&self) -> Vec<String> {
        let optional = |value: Option<String>| value.unwrap_or_else(|| "<none>".to_string());

        [
            ("input", self.input.clone()),
            ("study", self.study.clone()),
            ("number", self.number.to_string()),
            ("boolean", self.boolean.to_string()),
            ("input_opt", optional(self.input_opt.clone())),
            ("study_opt", optional(self.study_opt.clone())),
            ("number_opt", optional(self.number_opt.map(|n| n.to_string()))),
        ]
        .into_iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect()
    }
}

/// `--input, --study` style list of option names for messages.
pub fn flag_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            if name.starts_with('-') {
                name.clone()
            } else {
                format!("--{name}")
            }
        })
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about() -> About {
        About::new("demo", "0.0.1")
    }

    #[test]
    fn test_demo_parse_binds_fields() {
        let mut demo = Demo::default();
        let mut out: Vec<u8> = Vec::new();
        let outcome = demo
            .parse(
                &about(),
                &["prog", "-i", "some_file", "--number_opt", "12", "--boolean"],
                &mut out,
            )
            .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(demo.input, "some_file");
        assert_eq!(demo.number_opt, Some(12));
        assert!(demo.boolean);
        assert_eq!(demo.number, 123);
        assert!(out.is_empty());
    }

    #[test]
    fn test_demo_write_help_lists_every_option() {
        let mut demo = Demo::default();
        let mut out: Vec<u8> = Vec::new();
        demo.write_help(&about(), &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        for name in ["--input", "--study", "--number", "--boolean", "--input_opt", "--study_opt", "--number_opt"] {
            assert!(written.contains(name), "help is missing {name}");
        }
    }

    #[test]
    fn test_summary_lines() {
        let demo = Demo {
            input: "a.txt".to_string(),
            number_opt: Some(5),
            ..Demo::default()
        };
        let lines = demo.summary_lines();

        assert_eq!(lines[0], "input = a.txt");
        assert_eq!(lines[2], "number = 123");
        assert_eq!(lines[4], "input_opt = <none>");
        assert_eq!(lines[6], "number_opt = 5");
    }

    #[test]
    fn test_flag_list() {
        let names = vec!["input".to_string(), "-l".to_string()];
        assert_eq!(flag_list(&names), "--input, -l");
    }
}
