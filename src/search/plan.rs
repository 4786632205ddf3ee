//! A plan is a sequence of ground actions leading from the initial state to a
//! goal state. This module provides the [`Plan`] struct.

use crate::parsed_types::Plan as ParsedPlan;
use crate::parsers::{strip_whitespace, Parser};
use crate::search::{GroundAction, Task, TaskError};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<GroundAction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(steps: Vec<GroundAction>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path, task: &Task) -> Result<Self, TaskError> {
        let text = std::fs::read_to_string(path).map_err(|source| TaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text, task)
    }

    /// Parses a plan file, one `Name(arg1,arg2,…)` step per line, and
    /// resolves each step against the task's schemas and symbol universe.
    pub fn from_text(text: &str, task: &Task) -> Result<Self, TaskError> {
        let stripped = strip_whitespace(text);
        let parsed =
            ParsedPlan::from_str(&stripped).map_err(|e| TaskError::Parse(e.to_string()))?;

        let mut steps = Vec::with_capacity(parsed.steps().len());
        for step in parsed.steps() {
            let schema = task
                .action_schemas()
                .iter()
                .find(|schema| {
                    schema.name() == step.action_name()
                        && schema.arity() == step.arguments().len()
                })
                .ok_or_else(|| TaskError::UnknownAction {
                    name: step.action_name().clone(),
                    arity: step.arguments().len(),
                })?;
            for argument in step.arguments() {
                if !task.symbols().contains(argument) {
                    return Err(TaskError::UnknownSymbol {
                        symbol: argument.clone(),
                        atom: format!("{}(…)", step.action_name()),
                    });
                }
            }
            steps.push(schema.ground(step.arguments()));
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[GroundAction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntoIterator for Plan {
    type Item = GroundAction;
    type IntoIter = std::vec::IntoIter<GroundAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [GroundAction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl Display for Plan {
    /// One ground action per line, in execution order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::BLOCKS_REORDER_TEXT;

    #[test]
    fn from_text_resolves_steps() {
        let task = Task::from_text(BLOCKS_REORDER_TEXT).unwrap();
        let plan = Plan::from_text("MoveToTable(A,B)\nMoveFromTable(B,C)\n", &task).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps()[0].to_string(), "MoveToTable(A,B)");
        // grounding happened: the step carries its instantiated conditions
        assert_eq!(plan.steps()[1].preconditions()[0].to_string(), "On(B,Table)");
    }

    #[test]
    fn unknown_action_is_rejected() {
        let task = Task::from_text(BLOCKS_REORDER_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("Teleport(A,B)", &task),
            Err(TaskError::UnknownAction { .. })
        ));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let task = Task::from_text(BLOCKS_REORDER_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("MoveToTable(A,D)", &task),
            Err(TaskError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        let task = Task::from_text(BLOCKS_REORDER_TEXT).unwrap();
        let plan = Plan::from_text("MoveToTable(A,B)\nMoveFromTable(B,C)", &task).unwrap();
        assert_eq!(Plan::from_text(&plan.to_string(), &task).unwrap(), plan);
    }
}
