use crate::search::{Heuristic, HeuristicValue, State, Task};

/// Weight applied to each unsatisfied goal atom. Empirical; large enough to
/// dominate the g-term, which makes the search greedy and the heuristic
/// inadmissible.
const GOAL_WEIGHT: f64 = 10.0;

/// Counts the goal atoms absent from the state, scaled by [`GOAL_WEIGHT`].
#[derive(Clone, Debug, Default)]
pub struct GoalCounting {}

impl GoalCounting {
    pub fn new() -> Self {
        GoalCounting {}
    }
}

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        (GOAL_WEIGHT * task.goal().count_unsatisfied(state) as f64).into()
    }
}
