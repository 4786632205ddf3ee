//! Provides parsers for whole problem files.

use crate::parsed_types::Problem;
use crate::parsers::{
    comma_separated_names, end_of_line, parse_action_definition, parse_literal, section_header,
    ParseResult, Span,
};
use nom::bytes::complete::{tag, tag_no_case};
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{pair, preceded, terminated, tuple};

/// Parses a whole problem file. The input must already be stripped of
/// whitespace (see [`crate::parsers::strip_whitespace`]); sections appear in
/// the fixed order `Symbols:`, `InitialConditions:`, `GoalConditions:`,
/// `Actions:`.
pub fn parse_problem<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Problem> {
    map(
        tuple((
            section_header("symbols", comma_separated_names),
            section_header("initialconditions", many0(parse_literal)),
            section_header("goalconditions", many0(parse_literal)),
            preceded(
                terminated(pair(tag_no_case("actions"), tag(":")), end_of_line),
                many0(parse_action_definition),
            ),
        )),
        |(symbols, init, goals, actions)| Problem::new(symbols, init, goals, actions),
    )(input.into())
}

impl crate::parsers::Parser for Problem {
    type Item = Problem;

    /// See [`parse_problem`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_problem(input)
    }
}
