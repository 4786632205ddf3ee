//! Contains definitions for a single step of a plan via the [`PlanStep`] type.

use crate::parsed_types::{ActionName, Name};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    action_name: ActionName,
    arguments: Vec<Name>,
}

impl PlanStep {
    pub const fn new(action_name: ActionName, arguments: Vec<Name>) -> Self {
        Self {
            action_name,
            arguments,
        }
    }

    pub const fn action_name(&self) -> &ActionName {
        &self.action_name
    }

    pub fn arguments(&self) -> &[Name] {
        self.arguments.as_slice()
    }
}
