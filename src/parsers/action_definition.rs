//! Provides parsers for action definitions.

use crate::parsed_types::ActionDefinition;
use crate::parsers::{
    comma_separated_names, end_of_line, parens, parse_action_name, parse_literal, section_header,
    ParseResult, Span,
};
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{pair, terminated, tuple};

/// Parses one action block: a head line `Name(p1,p2,…)`, a `Preconditions:`
/// line and an `Effects:` line. Either condition line may be empty.
pub fn parse_action_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, ActionDefinition> {
    map(
        tuple((
            terminated(
                pair(parse_action_name, parens(comma_separated_names)),
                end_of_line,
            ),
            section_header("preconditions", many0(parse_literal)),
            section_header("effects", many0(parse_literal)),
        )),
        |((name, parameters), preconditions, effects)| {
            ActionDefinition::new(name, parameters, preconditions, effects)
        },
    )(input.into())
}

impl crate::parsers::Parser for ActionDefinition {
    type Item = ActionDefinition;

    /// See [`parse_action_definition`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action_definition(input)
    }
}
