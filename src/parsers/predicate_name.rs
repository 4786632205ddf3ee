//! Provides parsers for predicate names.

use crate::parsed_types::PredicateName;
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_while;
use nom::character::complete::satisfy;
use nom::combinator::{map, recognize};
use nom::sequence::pair;

/// Parses a predicate name: an uppercase letter followed by letters and
/// underscores.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_predicate_name, preamble::*};
/// # use groundplan::parsed_types::PredicateName;
/// assert!(parse_predicate_name(Span::new("On")).is_value(PredicateName::from("On")));
/// assert!(parse_predicate_name(Span::new("In_Room")).is_value(PredicateName::from("In_Room")));
///
/// assert!(parse_predicate_name(Span::new("on")).is_err());
/// assert!(parse_predicate_name(Span::new("4x")).is_err());
/// ```
pub fn parse_predicate_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PredicateName> {
    map(capitalised_name, |span: Span| {
        PredicateName::from(*span.fragment())
    })(input.into())
}

/// Recognizes the shared `[A-Z][a-zA-Z_]*` syntax of predicate and action
/// heads.
pub(super) fn capitalised_name(input: Span) -> ParseResult<Span> {
    recognize(pair(
        satisfy(|c| c.is_ascii_uppercase()),
        take_while(|c: char| c.is_ascii_alphabetic() || c == '_'),
    ))(input)
}

impl crate::parsers::Parser for PredicateName {
    type Item = PredicateName;

    /// See [`parse_predicate_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_predicate_name(input)
    }
}
