//! Provides parsers for atoms.

use crate::parsed_types::Atom;
use crate::parsers::{comma_separated_names, parens, parse_predicate_name, ParseResult, Span};
use nom::combinator::map;
use nom::sequence::pair;

/// Parses an atom, i.e. `Predicate(arg1,arg2,…)`. Nullary atoms are not part
/// of the format; at least one argument is required.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_atom, preamble::*};
/// # use groundplan::parsed_types::{Atom, Name, PredicateName};
/// assert!(parse_atom(Span::new("On(A,Table)")).is_value(Atom::new(
///     PredicateName::from("On"),
///     vec![Name::new("A"), Name::new("Table")],
/// )));
///
/// assert!(parse_atom(Span::new("On()")).is_err());
/// assert!(parse_atom(Span::new("on(A)")).is_err());
/// ```
pub fn parse_atom<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Atom> {
    map(
        pair(parse_predicate_name, parens(comma_separated_names)),
        |(predicate_name, values)| Atom::new(predicate_name, values),
    )(input.into())
}

impl crate::parsers::Parser for Atom {
    type Item = Atom;

    /// See [`parse_atom`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_atom(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Name, PredicateName};
    use crate::parsers::UnwrapValue;

    #[test]
    fn single_argument() {
        assert!(parse_atom(Span::new("Clear(b1)")).is_value(Atom::new(
            PredicateName::from("Clear"),
            vec![Name::new("b1")],
        )));
    }

    #[test]
    fn rejects_missing_parens() {
        assert!(parse_atom(Span::new("Clear")).is_err());
    }
}
