//! Command-line argument parsing for the playground binary.
//!
//! The playground's own flags are handled by `clap`; the command line under
//! test is a single string handed to the `argz-core` parser after splitting.

use argz_core::about::About;
use clap::Parser;

use crate::error::Result;

/// Description shown in the demo table's help output.
pub const DEMO_DESCRIPTION: &str = "My program description";

/// Command-line arguments for the `argz` playground.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argz_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argz", "prog -i a.txt"]);
/// assert_eq!(args.tokens().unwrap(), vec!["prog", "-i", "a.txt"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// The command line to parse, program name first.
    ///
    /// Split with shell quoting rules, so `prog -i "some path.txt"` yields
    /// three arguments.
    pub command_line: String,

    /// Treat a command line without arguments as valid instead of writing help.
    #[arg(long, short = 'a', action)]
    pub allow_empty: bool,

    /// Exit with a failure code when a required option is missing.
    #[arg(long, short = 's', action)]
    pub strict: bool,
}

impl Args {
    /// Splits the command line into an argument vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the command line has unbalanced quotes.
    pub fn tokens(&self) -> Result<Vec<String>> {
        Ok(shell_words::split(&self.command_line)?)
    }

    /// Metadata for the demo table, using this crate's version.
    #[must_use]
    pub fn about(&self) -> About {
        let about = About::new(DEMO_DESCRIPTION, env!("CARGO_PKG_VERSION"));
        if self.allow_empty {
            about.allow_empty()
        } else {
            about
        }
    }
}
