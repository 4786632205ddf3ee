//! Contains definitions for a parsed plan via the [`Plan`] type.

use crate::parsed_types::PlanStep;

/// A parsed plan file: one ground action per line.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan(Vec<PlanStep>);

impl Plan {
    pub const fn new(steps: Vec<PlanStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[PlanStep] {
        self.0.as_slice()
    }
}
