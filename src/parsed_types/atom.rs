//! Contains atoms via the [`Atom`] type.

use crate::parsed_types::{Name, PredicateName};
use std::ops::Deref;

/// A predicate applied to a list of argument names, exactly as written in the
/// problem file. Whether an argument is a schema variable or a concrete
/// symbol is not decided here; that depends on the parameter list of the
/// surrounding action, if any.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Atom {
    predicate_name: PredicateName,
    values: Vec<Name>,
}

impl Atom {
    pub const fn new(predicate_name: PredicateName, values: Vec<Name>) -> Self {
        Self {
            predicate_name,
            values,
        }
    }

    /// Returns the predicate name.
    pub const fn predicate_name(&self) -> &PredicateName {
        &self.predicate_name
    }

    /// Gets a reference to the argument values.
    pub fn values(&self) -> &[Name] {
        self.values.as_slice()
    }
}

impl From<(PredicateName, Vec<Name>)> for Atom {
    fn from(value: (PredicateName, Vec<Name>)) -> Self {
        Atom::new(value.0, value.1)
    }
}

impl Deref for Atom {
    type Target = [Name];

    fn deref(&self) -> &Self::Target {
        self.values()
    }
}
