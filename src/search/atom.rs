use crate::parsed_types::{Atom as ParsedAtom, Name, PredicateName};
use crate::search::Negatable;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// Argument tuples of atoms and actions. Almost always two or three symbols,
/// so they are kept inline.
pub type Arguments = SmallVec<[Name; 3]>;

/// A ground condition: a predicate applied to a tuple of symbols. The
/// [`Display`] form `Name(arg1,arg2,…)` is the canonical form used for state
/// serialization, and the derived [`Ord`] (predicate first, then arguments)
/// matches the lexicographic order of those canonical strings for the
/// identifier alphabet of the format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    predicate: PredicateName,
    arguments: Arguments,
}

impl Atom {
    pub fn new(predicate: PredicateName, arguments: Arguments) -> Self {
        Self {
            predicate,
            arguments,
        }
    }

    pub fn from_parsed(atom: &ParsedAtom) -> Self {
        Self {
            predicate: atom.predicate_name().clone(),
            arguments: atom.values().iter().cloned().collect(),
        }
    }

    #[inline(always)]
    pub fn predicate(&self) -> &PredicateName {
        &self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[Name] {
        &self.arguments
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}

impl Negatable<Atom> {
    pub fn from_parsed(atom: &ParsedAtom, negated: bool) -> Self {
        Negatable::new(negated, Atom::from_parsed(atom))
    }

    #[inline(always)]
    pub fn predicate(&self) -> &PredicateName {
        self.underlying().predicate()
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[Name] {
        self.underlying().arguments()
    }
}

impl Display for Negatable<Atom> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "!")?;
        }
        Display::fmt(self.underlying(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn atom(predicate: &str, arguments: &[&str]) -> Atom {
        Atom::new(
            PredicateName::from(predicate),
            arguments.iter().map(|name| Name::new(*name)).collect(),
        )
    }

    #[test]
    fn canonical_form() {
        assert_eq!(atom("On", &["A", "Table"]).to_string(), "On(A,Table)");
        assert_eq!(
            Negatable::Negative(atom("Clear", &["B"])).to_string(),
            "!Clear(B)"
        );
    }

    #[test]
    fn order_matches_canonical_strings() {
        let mut atoms = vec![
            atom("On", &["B", "A"]),
            atom("Clear", &["A"]),
            atom("On", &["A", "B"]),
        ];
        atoms.sort();
        let printed: Vec<String> = atoms.iter().map(Atom::to_string).collect();
        let mut sorted = printed.clone();
        sorted.sort();
        assert_eq!(printed, sorted);
    }

    #[test]
    fn equality_includes_argument_order() {
        let a: Arguments = smallvec![Name::new("A"), Name::new("B")];
        let b: Arguments = smallvec![Name::new("B"), Name::new("A")];
        assert_ne!(
            Atom::new(PredicateName::from("On"), a),
            Atom::new(PredicateName::from("On"), b)
        );
    }
}
