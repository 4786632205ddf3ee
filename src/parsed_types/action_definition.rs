//! Contains action definitions via the [`ActionDefinition`] type.

use crate::parsed_types::{ActionName, Literal, Name};

/// One parsed action block: a head line naming the schema and its parameters,
/// a `Preconditions:` line and an `Effects:` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    name: ActionName,
    parameters: Vec<Name>,
    preconditions: Vec<Literal>,
    effects: Vec<Literal>,
}

impl ActionDefinition {
    pub const fn new(
        name: ActionName,
        parameters: Vec<Name>,
        preconditions: Vec<Literal>,
        effects: Vec<Literal>,
    ) -> Self {
        Self {
            name,
            parameters,
            preconditions,
            effects,
        }
    }

    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn parameters(&self) -> &[Name] {
        self.parameters.as_slice()
    }

    pub fn preconditions(&self) -> &[Literal] {
        self.preconditions.as_slice()
    }

    pub fn effects(&self) -> &[Literal] {
        self.effects.as_slice()
    }
}
