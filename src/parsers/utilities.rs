//! Utility parsers.

use crate::parsed_types::Name;
use crate::parsers::{parse_name, ParseResult, Span};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, line_ending},
    combinator::{eof, map},
    multi::separated_list1,
    sequence::{delimited, terminated},
};

/// Removes every whitespace character within each line and drops blank
/// lines. The file format is whitespace-insensitive per line, so all other
/// parsers in this module operate on stripped input.
pub fn strip_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes surrounding parentheses, returning the output of `inner`.
pub fn parens<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(char('('), inner, char(')'))
}

/// A combinator matching a section header such as `Symbols:`,
/// case-insensitively, before running `inner` on the rest of the line.
pub fn section_header<'a, F, O>(
    name: &'a str,
    inner: F,
) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(terminated(tag_no_case(name), tag(":")), inner, end_of_line)
}

/// Parses a non-empty comma-separated list of names.
pub fn comma_separated_names(input: Span) -> ParseResult<Vec<Name>> {
    separated_list1(char(','), parse_name)(input)
}

/// Consumes a line ending, or succeeds at the end of input.
pub fn end_of_line(input: Span) -> ParseResult<()> {
    alt((map(line_ending, |_| ()), map(eof, |_| ())))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::UnwrapValue;

    #[test]
    fn strip_whitespace_flattens_lines() {
        let input = "Symbols: A, B\n\n  Initial Conditions : On(A, B)  \n";
        assert_eq!(
            strip_whitespace(input),
            "Symbols:A,B\nInitialConditions:On(A,B)"
        );
    }

    #[test]
    fn parens_works() {
        let mut parser = parens(parse_name);
        assert!(parser(Span::new("(content)")).is_value(Name::new("content")));
        assert!(parser(Span::new("content")).is_err());
    }

    #[test]
    fn section_header_is_case_insensitive() {
        let mut parser = section_header("symbols", comma_separated_names);
        assert!(parser(Span::new("SYMBOLS:x,y"))
            .is_value(vec![Name::new("x"), Name::new("y")]));
        assert!(parser(Span::new("symbols:x")).is_value(vec![Name::new("x")]));
        assert!(parser(Span::new("symbol:x")).is_err());
    }
}
