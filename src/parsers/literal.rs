//! Provides parsers for literals.

use crate::parsed_types::Literal;
use crate::parsers::{parse_atom, ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::preceded;

/// Parses a literal, i.e. `<atom>` or `!<atom>`.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_literal, preamble::*};
/// # use groundplan::parsed_types::{Atom, Literal, Name, PredicateName};
/// let on = Atom::new(PredicateName::from("On"), vec![Name::new("A"), Name::new("B")]);
/// assert!(parse_literal(Span::new("On(A,B)")).is_value(Literal::new(on.clone())));
/// assert!(parse_literal(Span::new("!On(A,B)")).is_value(Literal::new_not(on)));
/// ```
pub fn parse_literal<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Literal> {
    let is_not = map(preceded(char('!'), parse_atom), Literal::new_not);
    let is = map(parse_atom, Literal::new);

    alt((is_not, is))(input.into())
}

impl crate::parsers::Parser for Literal {
    type Item = Literal;

    /// See [`parse_literal`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_literal(input)
    }
}
