//! Assertion helpers for parser tests.

use crate::parsers::ParseResult;
use std::fmt::Debug;

/// Convenience trait for asserting on [`ParseResult`]s in tests and doctests
/// without unwrapping the remaining input by hand.
pub trait UnwrapValue<T> {
    /// Returns true if the parse succeeded and produced `value`, regardless
    /// of remaining input.
    fn is_value(&self, value: T) -> bool;
}

impl<T: PartialEq + Debug> UnwrapValue<T> for ParseResult<'_, T> {
    fn is_value(&self, value: T) -> bool {
        match self {
            Ok((_, parsed)) => *parsed == value,
            Err(_) => false,
        }
    }
}
