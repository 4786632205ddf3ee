//! Enumeration of all ground actions over the symbol universe.

use crate::parsed_types::Name;
use crate::search::{ActionSchema, GroundAction};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::info;

/// Produces every instantiation of every schema: for a schema of arity `k`,
/// one ground action per ordered `k`-tuple of distinct symbols. A schema
/// whose arity exceeds the universe contributes no instances.
///
/// The binding tuples for a given arity are enumerated once and shared by all
/// schemas of that arity. Output order is deterministic: schemas in
/// declaration order, tuples in the lexicographic order induced by the symbol
/// declaration order.
pub fn ground_all(schemas: &[ActionSchema], symbols: &[Name]) -> Vec<GroundAction> {
    let mut bindings_by_arity: HashMap<usize, Vec<Vec<Name>>> = HashMap::new();
    for schema in schemas {
        bindings_by_arity
            .entry(schema.arity())
            .or_insert_with(|| symbols.iter().cloned().permutations(schema.arity()).collect());
    }

    let mut ground_actions = Vec::new();
    for schema in schemas {
        for binding in &bindings_by_arity[&schema.arity()] {
            ground_actions.push(schema.ground(binding));
        }
    }

    info!(
        num_schemas = schemas.len(),
        num_symbols = symbols.len(),
        num_ground_actions = ground_actions.len(),
    );

    ground_actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Task;
    use std::collections::HashSet;

    const SWAP_PROBLEM: &str = r#"
    Symbols: X,Y,Z
    InitialConditions: P(X)
    GoalConditions: P(Y)
    Actions:
    Swap(u,v)
    Preconditions: P(u)
    Effects: P(v) !P(u)
    "#;

    fn swap_actions() -> Vec<GroundAction> {
        let task = Task::from_text(SWAP_PROBLEM).unwrap();
        ground_all(task.action_schemas(), task.symbols())
    }

    #[test]
    fn arity_two_over_three_symbols_yields_six() {
        assert_eq!(swap_actions().len(), 6);
    }

    #[test]
    fn bindings_are_pairwise_distinct() {
        for action in swap_actions() {
            let unique: HashSet<&Name> = action.arguments().iter().collect();
            assert_eq!(unique.len(), action.arguments().len(), "{action}");
        }
    }

    #[test]
    fn every_instance_appears_exactly_once() {
        let actions = swap_actions();
        let printed: HashSet<String> = actions.iter().map(ToString::to_string).collect();
        assert_eq!(printed.len(), actions.len());
        assert!(printed.contains("Swap(Z,X)"));
    }

    #[test]
    fn oversized_arity_contributes_nothing() {
        let task = Task::from_text(
            "Symbols:A,B\nInitialConditions:P(A)\nGoalConditions:P(B)\nActions:\nBig(x,y,z)\nPreconditions:P(x)\nEffects:P(y)",
        )
        .unwrap();
        assert!(ground_all(task.action_schemas(), task.symbols()).is_empty());
    }

    #[test]
    fn constants_survive_substitution() {
        let task = Task::from_text(
            "Symbols:A,B,Table\nInitialConditions:On(A,Table)\nGoalConditions:On(A,B)\nActions:\nMoveFromTable(x,y)\nPreconditions:On(x,Table)\nEffects:On(x,y)!On(x,Table)",
        )
        .unwrap();
        let actions = ground_all(task.action_schemas(), task.symbols());
        let action = actions
            .iter()
            .find(|action| action.to_string() == "MoveFromTable(A,B)")
            .unwrap();
        assert_eq!(action.preconditions()[0].to_string(), "On(A,Table)");
    }
}
