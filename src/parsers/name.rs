//! Provides parsers for names.

use crate::parsed_types::Name;
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_while1;
use nom::combinator::map;

/// Parses a name, i.e. an identifier of letters, digits and underscores.
/// Symbols, schema parameters and condition arguments all use this syntax.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_name, preamble::*};
/// # use groundplan::parsed_types::Name;
/// assert!(parse_name(Span::new("b1")).is_value(Name::new("b1")));
/// assert!(parse_name(Span::new("Table")).is_value(Name::new("Table")));
///
/// assert!(parse_name(Span::new("")).is_err());
/// assert!(parse_name(Span::new(",a")).is_err());
/// ```
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    map(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        |span: Span| Name::new(*span.fragment()),
    )(input.into())
}

impl crate::parsers::Parser for Name {
    type Item = Name;

    /// See [`parse_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_name(input)
    }
}
