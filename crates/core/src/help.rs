//! Help and version text.
//!
//! Rendering is a pure function of the metadata and the option table; the
//! `write_*` helpers push the lines into an [`OutputSink`].

use crate::about::About;
use crate::error::Result;
use crate::options::Options;
use crate::sink::OutputSink;
use crate::value;

pub fn help_lines(about: &About, options: &Options<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(options.len() + 6);

    if !about.description.is_empty() {
        lines.push(about.description.clone());
    }
    if !about.version.is_empty() {
        lines.push(version_line(about));
    }
    lines.push(String::new());

    lines.push("-h, --help\t\twrite help to console".to_string());
    lines.push("-v, --version\t\twrite the version to console".to_string());

    for descriptor in options {
        let marker = if descriptor.required {
            " (required)\t"
        } else {
            "\t\t"
        };
        let mut line = format!("{}{marker}{}", descriptor.ids, descriptor.help);

        let default = value::render(&descriptor.binding);
        if !default.is_empty() {
            line.push_str(", default: ");
            line.push_str(&default);
        }
        lines.push(line);
    }
    lines.push(String::new());

    lines
}

pub fn version_line(about: &About) -> String {
    format!("Version: {}", about.version)
}

/// # Errors
///
/// Returns an error if the sink fails to write.
pub fn write_help<W: OutputSink + ?Sized>(
    sink: &mut W,
    about: &About,
    options: &Options<'_>,
) -> Result<()> {
    for line in help_lines(about, options) {
        sink.write_line(&line)?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the sink fails to write.
pub fn write_version<W: OutputSink + ?Sized>(sink: &mut W, about: &About) -> Result<()> {
    sink.write_line(&version_line(about))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Ids, OptionDescriptor};

    #[test]
    fn test_help_lines_layout() {
        let about = About::new("My program description", "1.2.3");
        let mut input = String::new();
        let mut number = 123i32;
        let mut number_opt: Option<i32> = None;
        let mut n = false;
        let options = Options::new(vec![
            OptionDescriptor::new(Ids::new("input", 'i'), &mut input, "the input file").required(),
            OptionDescriptor::new(Ids::long("number"), &mut number, "input an int"),
            OptionDescriptor::new(Ids::long("number_opt"), &mut number_opt, "input an int"),
            OptionDescriptor::new(Ids::long("n"), &mut n, "short"),
        ])
        .unwrap();

        let lines = help_lines(&about, &options);
        assert_eq!(
            lines,
            vec![
                "My program description",
                "Version: 1.2.3",
                "",
                "-h, --help\t\twrite help to console",
                "-v, --version\t\twrite the version to console",
                "-i, --input (required)\tthe input file",
                "--number\t\tinput an int, default: 123",
                "--number_opt\t\tinput an int",
                "-n\t\tshort, default: false",
                "",
            ]
        );
    }

    #[test]
    fn test_help_lines_without_metadata() {
        let about = About::new("", "");
        let options = Options::new(Vec::new()).unwrap();
        let lines = help_lines(&about, &options);
        assert_eq!(lines.first().map(String::as_str), Some(""));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_version() {
        let about = About::new("desc", "0.9.1");
        let mut buffer: Vec<u8> = Vec::new();
        write_version(&mut buffer, &about).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Version: 0.9.1\n");
    }
}
