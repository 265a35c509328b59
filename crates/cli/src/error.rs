use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Parse(#[from] argz_core::error::Error),

    #[error("Could not split command line: {}", .0)]
    Tokenize(#[from] shell_words::ParseError),

    #[error("Error writing output: {}", .0)]
    Io(#[from] std::io::Error),
}
