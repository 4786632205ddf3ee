mod goal_counting;
mod heuristic;
mod relaxed_plan;
mod zero_heuristic;

pub use goal_counting::GoalCounting;
pub use heuristic::{Heuristic, HeuristicMode, HeuristicValue};
pub use relaxed_plan::RelaxedPlanHeuristic;
pub use zero_heuristic::ZeroHeuristic;
