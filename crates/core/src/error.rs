use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid option: an option needs a long name or an alias")]
    EmptyIdentifier,

    #[error("Found a non-unique option name: `--{}`", .0)]
    DuplicateName(String),

    #[error("Malformed flag `{}`: expected `-alias` or `--name`", .0)]
    MalformedFlag(String),

    #[error("Unknown alias flag `-{}`", .0)]
    UnknownAlias(char),

    #[error("Unknown option `--{}`", .0)]
    UnknownOption(String),

    #[error("Option `{}` expects a value but none was given", .0)]
    MissingValue(String),

    #[error("Invalid number for `{}`: \"{}\"", .name, .value)]
    InvalidNumber { name: String, value: String },

    #[error("Required option(s) not provided: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("Error writing output: {}", .0)]
    Io(#[from] std::io::Error),
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyIdentifier,
    DuplicateName,
    MalformedFlag,
    UnknownAlias,
    UnknownOption,
    MissingValue,
    InvalidNumber,
    MissingRequired,
    Io,
}

impl Error {
    pub fn invalid_number(name: &str, value: &str) -> Self {
        Self::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyIdentifier => ErrorKind::EmptyIdentifier,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::MalformedFlag(_) => ErrorKind::MalformedFlag,
            Self::UnknownAlias(_) => ErrorKind::UnknownAlias,
            Self::UnknownOption(_) => ErrorKind::UnknownOption,
            Self::MissingValue(_) => ErrorKind::MissingValue,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::MissingRequired(_) => ErrorKind::MissingRequired,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
