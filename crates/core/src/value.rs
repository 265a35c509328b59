//! Typed destinations and value coercion.
//!
//! A [`Binding`] is a borrowed handle to a caller-owned variable. The parser
//! writes through it and never owns the value; the caller's variable must
//! outlive the parse call.

use std::str::FromStr;

use crate::error::{Error, Result};

/// A mutable reference to the variable an option writes into.
#[derive(Debug)]
pub enum Binding<'a> {
    Bool(&'a mut bool),
    I32(&'a mut i32),
    U32(&'a mut u32),
    I64(&'a mut i64),
    U64(&'a mut u64),
    Str(&'a mut String),
    OptI32(&'a mut Option<i32>),
    OptU32(&'a mut Option<u32>),
    OptI64(&'a mut Option<i64>),
    OptU64(&'a mut Option<u64>),
    OptStr(&'a mut Option<String>),
}

macro_rules! binding_from {
    ($($target:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $target> for Binding<'a> {
                fn from(target: &'a mut $target) -> Self {
                    Self::$variant(target)
                }
            }
        )*
    };
}

binding_from! {
    bool => Bool,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    String => Str,
    Option<i32> => OptI32,
    Option<u32> => OptU32,
    Option<i64> => OptI64,
    Option<u64> => OptU64,
    Option<String> => OptStr,
}

impl Binding<'_> {
    /// Boolean destinations are switches and never take a value token.
    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Bool(_))
    }
}

/// Coerces `token` into the binding's type and stores it.
///
/// Strings are taken verbatim. Booleans are true only for the literal `"true"`.
/// Integers must parse completely as base-10 for the destination's width.
/// Optional destinations are always populated with the coerced value.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] naming `name` and `token` when an integer
/// destination cannot hold `token`. The destination is left untouched.
pub fn coerce(binding: &mut Binding<'_>, name: &str, token: &str) -> Result<()> {
    match binding {
        Binding::Bool(target) => **target = token == "true",
        Binding::I32(target) => **target = parse_number(name, token)?,
        Binding::U32(target) => **target = parse_number(name, token)?,
        Binding::I64(target) => **target = parse_number(name, token)?,
        Binding::U64(target) => **target = parse_number(name, token)?,
        Binding::Str(target) => **target = token.to_string(),
        Binding::OptI32(target) => **target = Some(parse_number(name, token)?),
        Binding::OptU32(target) => **target = Some(parse_number(name, token)?),
        Binding::OptI64(target) => **target = Some(parse_number(name, token)?),
        Binding::OptU64(target) => **target = Some(parse_number(name, token)?),
        Binding::OptStr(target) => **target = Some(token.to_string()),
    }

    Ok(())
}

/// Renders the binding's current value as text.
///
/// Unset optionals render as an empty string.
#[must_use]
pub fn render(binding: &Binding<'_>) -> String {
    match binding {
        Binding::Bool(value) => value.to_string(),
        Binding::I32(value) => value.to_string(),
        Binding::U32(value) => value.to_string(),
        Binding::I64(value) => value.to_string(),
        Binding::U64(value) => value.to_string(),
        Binding::Str(value) => value.to_string(),
        Binding::OptI32(value) => render_optional(**value),
        Binding::OptU32(value) => render_optional(**value),
        Binding::OptI64(value) => render_optional(**value),
        Binding::OptU64(value) => render_optional(**value),
        Binding::OptStr(value) => (**value).as_deref().unwrap_or_default().to_string(),
    }
}

fn render_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

fn parse_number<T: FromStr>(name: &str, token: &str) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|_| Error::invalid_number(name, token))
}
