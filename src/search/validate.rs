use crate::search::{Plan, Task};

/// Replays `plan` from the task's initial state, checking that every step is
/// applicable in the state it is executed in and that the final state
/// satisfies the goal.
pub fn validate(plan: &Plan, task: &Task) -> Result<(), String> {
    let mut current = task.initial_state().clone();
    for action in plan.steps() {
        if !current.satisfies(action.preconditions()) {
            return Err(format!(
                "action {action} is not applicable in state: {current}"
            ));
        }
        current = current.apply(action.effects());
    }

    if !task.goal().is_satisfied(&current) {
        return Err(format!(
            "plan does not reach the goal, final state: {current}"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn validate_reorder_plan(plan_text: &str) -> Result<(), String> {
        let task = Task::from_text(BLOCKS_REORDER_TEXT).unwrap();
        let plan = Plan::from_text(plan_text, &task).unwrap();
        validate(&plan, &task)
    }

    #[test]
    fn good_plan_is_ok() {
        assert!(validate_reorder_plan("MoveToTable(A,B)\nMoveFromTable(B,C)").is_ok());
    }

    #[test]
    fn inapplicable_step_is_rejected() {
        // B is not clear in the initial state
        assert!(validate_reorder_plan("MoveFromTable(B,C)").is_err());
    }

    #[test]
    fn incomplete_plan_is_rejected() {
        assert!(validate_reorder_plan("MoveToTable(A,B)").is_err());
    }

    #[test]
    fn empty_plan_fails_unless_goal_holds() {
        assert!(validate_reorder_plan("").is_err());

        let task = Task::from_text(BLOCKS_SATISFIED_TEXT).unwrap();
        assert!(validate(&Plan::empty(), &task).is_ok());
    }
}
