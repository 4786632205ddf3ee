//! Contains literals via the [`Literal`] type.

use crate::parsed_types::Atom;

/// An [`Atom`] or its negated value. A leading `!` in the problem file
/// produces the negative variant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Literal {
    Positive(Atom),
    Negative(Atom),
}

impl Literal {
    pub const fn new(atom: Atom) -> Self {
        Self::Positive(atom)
    }

    pub const fn new_not(atom: Atom) -> Self {
        Self::Negative(atom)
    }

    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(..))
    }

    pub const fn atom(&self) -> &Atom {
        match self {
            Self::Positive(atom) => atom,
            Self::Negative(atom) => atom,
        }
    }
}

impl From<Atom> for Literal {
    fn from(value: Atom) -> Self {
        Literal::new(value)
    }
}
