//! Helpers for asserting on parser output.

use crate::parsers::ParseResult;

/// Inspects the value of a successful parse.
pub trait UnwrapValue<'a, T> {
    /// Whether the parse succeeded with `value`, ignoring any remaining input.
    fn is_value(&self, value: T) -> bool;

    /// Returns the parsed value, panicking on a parse error.
    fn unwrap_value(self) -> T;
}

impl<'a, T: PartialEq> UnwrapValue<'a, T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn unwrap_value(self) -> T {
        match self {
            Ok((_, value)) => value,
            Err(e) => panic!("parse failed: {e:?}"),
        }
    }
}

/// Checks that a parse consumed its whole input.
#[cfg(test)]
pub(crate) trait Match<T> {
    fn is_exactly(&self, value: T) -> bool;
}

#[cfg(test)]
impl<'a, T: PartialEq> Match<T> for ParseResult<'a, T> {
    fn is_exactly(&self, value: T) -> bool {
        matches!(self, Ok((remainder, parsed)) if remainder.is_empty() && *parsed == value)
    }
}
