//! Provides parsers for action names.

use crate::parsed_types::ActionName;
use crate::parsers::predicate_name::capitalised_name;
use crate::parsers::{ParseResult, Span};
use nom::combinator::map;

/// Parses an action name. Action heads use the same capitalised-name syntax
/// as predicates.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_action_name, preamble::*};
/// # use groundplan::parsed_types::ActionName;
/// assert!(parse_action_name(Span::new("MoveToBlock")).is_value(ActionName::from("MoveToBlock")));
/// assert!(parse_action_name(Span::new("move")).is_err());
/// ```
pub fn parse_action_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ActionName> {
    map(capitalised_name, |span: Span| {
        ActionName::from(*span.fragment())
    })(input.into())
}

impl crate::parsers::Parser for ActionName {
    type Item = ActionName;

    /// See [`parse_action_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action_name(input)
    }
}
