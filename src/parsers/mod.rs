//! Parsers for the line-oriented problem-file format.
//!
//! The format is whitespace-insensitive within a line: callers are expected
//! to run input through [`strip_whitespace`] before parsing, after which
//! literals within a section line simply abut one another. All section
//! headers are matched case-insensitively.

mod action_definition;
mod action_name;
mod atom;
mod literal;
mod name;
mod plan;
mod plan_step;
mod predicate_name;
mod problem;
mod test_helpers;
mod utilities;

pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use action_definition::parse_action_definition;
pub use action_name::parse_action_name;
pub use atom::parse_atom;
pub use literal::parse_literal;
pub use name::parse_name;
pub use plan::parse_plan;
pub use plan_step::parse_plan_step;
pub use predicate_name::parse_predicate_name;
pub use problem::parse_problem;

// Input preparation and combinators
pub use utilities::strip_whitespace;
pub(crate) use utilities::{comma_separated_names, end_of_line, parens, section_header};
