//! Provides parsers for single plan steps.

use crate::parsed_types::PlanStep;
use crate::parsers::{comma_separated_names, parens, parse_action_name, ParseResult, Span};
use nom::combinator::map;
use nom::sequence::pair;

/// Parses a single step of a plan, i.e. `Name(arg1,arg2,…)`, the same shape
/// the planner prints.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_plan_step, preamble::*};
/// # use groundplan::parsed_types::{ActionName, Name, PlanStep};
/// assert!(parse_plan_step(Span::new("MoveFromTable(A,B)")).is_value(PlanStep::new(
///     ActionName::from("MoveFromTable"),
///     vec![Name::new("A"), Name::new("B")],
/// )));
/// ```
pub fn parse_plan_step<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PlanStep> {
    map(
        pair(parse_action_name, parens(comma_separated_names)),
        |(action_name, arguments)| PlanStep::new(action_name, arguments),
    )(input.into())
}

impl crate::parsers::Parser for PlanStep {
    type Item = PlanStep;

    /// See [`parse_plan_step`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan_step(input)
    }
}
