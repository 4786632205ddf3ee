use crate::parsed_types::{ActionName, Name};
use crate::search::{atom::Arguments, Atom, Negatable};
use std::fmt::{self, Display, Formatter};

/// An instantiated action schema: every parameter bound to a symbol, with the
/// ground preconditions and effects precomputed at grounding time.
#[derive(Debug, Clone)]
pub struct GroundAction {
    name: ActionName,
    arguments: Arguments,
    preconditions: Vec<Negatable<Atom>>,
    effects: Vec<Negatable<Atom>>,
}

impl GroundAction {
    pub fn new(
        name: ActionName,
        arguments: Arguments,
        preconditions: Vec<Negatable<Atom>>,
        effects: Vec<Negatable<Atom>>,
    ) -> Self {
        Self {
            name,
            arguments,
            preconditions,
            effects,
        }
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn arguments(&self) -> &[Name] {
        &self.arguments
    }

    pub fn preconditions(&self) -> &[Negatable<Atom>] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[Negatable<Atom>] {
        &self.effects
    }
}

/// Ground actions are identified by name and argument tuple; the conditions
/// are derived data.
impl PartialEq for GroundAction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arguments == other.arguments
    }
}

impl Eq for GroundAction {}

impl Display for GroundAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}
