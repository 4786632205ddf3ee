//! Contains the parsed problem file via the [`Problem`] type.

use crate::parsed_types::{ActionDefinition, Literal, Name};

/// A parsed problem file: the declared symbol universe, the initial and goal
/// condition literals in file order, and the action definitions.
///
/// Literal order matters for the initial and goal sections: a `!`-prefixed
/// literal there removes a previously accumulated ground condition, so the
/// sections are kept as sequences rather than sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    symbols: Vec<Name>,
    init: Vec<Literal>,
    goals: Vec<Literal>,
    actions: Vec<ActionDefinition>,
}

impl Problem {
    pub const fn new(
        symbols: Vec<Name>,
        init: Vec<Literal>,
        goals: Vec<Literal>,
        actions: Vec<ActionDefinition>,
    ) -> Self {
        Self {
            symbols,
            init,
            goals,
            actions,
        }
    }

    pub fn symbols(&self) -> &[Name] {
        self.symbols.as_slice()
    }

    pub fn init(&self) -> &[Literal] {
        self.init.as_slice()
    }

    pub fn goals(&self) -> &[Literal] {
        self.goals.as_slice()
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        self.actions.as_slice()
    }
}
