//! Argz Core Library
//!
//! This crate provides a small declarative command-line option parser. Options
//! are described once in a table that binds each flag to a caller-owned
//! variable; parsing writes matched values straight into those variables.
//!
//! # Key Features
//!
//! - **Option Table**: Long names, single-character aliases, help text and required-ness
//! - **Typed Bindings**: `bool`, 32/64-bit signed and unsigned integers, `String` and their `Option` forms
//! - **Built-in Help and Version**: `-h`/`--help` and `-v`/`--version`, written to an injected sink
//! - **Required Options**: Every missing required option is reported, not just the first
//! - **Error Handling**: Typed errors for malformed flags, unknown aliases and bad numbers
//!
//! # Examples
//!
//! ```
//! use argz_core::about::About;
//! use argz_core::options::{Ids, OptionDescriptor, Options};
//! use argz_core::parser::parse;
//!
//! let about = About::new("My program description", "1.2.3");
//!
//! let mut input = String::new();
//! let mut number = 123i32;
//! let mut verbose = false;
//!
//! let mut options = Options::new(vec![
//!     OptionDescriptor::new(Ids::new("input", 'i'), &mut input, "the input file").required(),
//!     OptionDescriptor::new(Ids::long("number"), &mut number, "input an int"),
//!     OptionDescriptor::new(Ids::long("verbose"), &mut verbose, "chatty output"),
//! ])?;
//!
//! let outcome = parse(&about, &mut options, &["prog", "-i", "a.txt", "--verbose"], &mut std::io::stdout())?;
//! outcome.require_all()?;
//! drop(options);
//!
//! assert_eq!(input, "a.txt");
//! assert_eq!(number, 123);
//! assert!(verbose);
//! # Ok::<(), argz_core::error::Error>(())
//! ```

pub mod about;
pub mod error;
pub mod help;
pub mod options;
pub mod parser;
pub mod sink;
pub mod value;
