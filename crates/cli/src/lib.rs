//! Argz CLI Library
//!
//! This crate provides `argz`, a playground for the `argz-core` parser. It takes
//! a command line as a single string, splits it with shell quoting rules, runs it
//! through a demo option table and prints the values each option ended up with.
//!
//! # Architecture
//!
//! - [`cli_args`]: The playground's own command-line interface
//! - [`demo`]: The demo option table and its destinations
//! - [`error`]: Errors from tokenizing and parsing
//!
//! # Examples
//!
//! ```bash
//! # Bind some options
//! argz 'prog -i some_file --study study_file --boolean --number 12345'
//!
//! # Show the demo table's help
//! argz 'prog --help'
//!
//! # Fail when a required option is missing
//! argz --strict 'prog --boolean'
//! ```

pub mod cli_args;
pub mod demo;
pub mod error;
