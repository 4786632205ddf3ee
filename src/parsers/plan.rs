//! Provides parsers for plan files.

use crate::parsed_types::Plan;
use crate::parsers::{end_of_line, parse_plan_step, ParseResult, Span};
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::terminated;

/// Parses a plan file: one ground action per line. Expects stripped input
/// (see [`crate::parsers::strip_whitespace`]); an empty input is the empty
/// plan.
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(many0(terminated(parse_plan_step, end_of_line)), Plan::new)(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::strip_whitespace;

    #[test]
    fn parses_steps_in_order() {
        let stripped = strip_whitespace("MoveToTable(A,B)\nMoveFromTable(B,C)\n");
        let (rest, plan) = parse_plan(Span::new(&stripped)).unwrap();
        assert!(rest.fragment().is_empty());
        assert_eq!(plan.steps().len(), 2);
        assert_eq!(*plan.steps()[0].action_name(), "MoveToTable".into());
        assert_eq!(*plan.steps()[1].action_name(), "MoveFromTable".into());
    }

    #[test]
    fn empty_input_is_empty_plan() {
        let (_, plan) = parse_plan(Span::new("")).unwrap();
        assert!(plan.steps().is_empty());
    }
}
