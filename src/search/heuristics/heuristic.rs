use crate::search::heuristics::{GoalCounting, RelaxedPlanHeuristic, ZeroHeuristic};
use crate::search::{GroundAction, State, Task};
use ordered_float::OrderedFloat;
use std::rc::Rc;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic {
    /// Estimates the number of actions still needed to reach the goal from
    /// `state`. An infinite value marks the state as a dead end.
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;
}

/// The heuristic strategies the planner recognizes, selected on the command
/// line by their numeric mode.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicMode {
    #[clap(name = "0", help = "No guidance; uniform-cost (Dijkstra) search, optimal")]
    Dijkstra,
    #[clap(
        name = "1",
        help = "Weighted count of unsatisfied goal atoms; fast but inadmissible"
    )]
    WeightedGoalCounting,
    #[clap(
        name = "2",
        help = "Plan length of the delete relaxation, computed by an inner \
        Dijkstra; admissible"
    )]
    RelaxedPlan,
}

impl HeuristicMode {
    /// Creates the heuristic evaluator for this mode. The ground action set
    /// is shared with the search engine; only the relaxed-plan heuristic
    /// holds on to it.
    pub fn create(&self, ground_actions: Rc<Vec<GroundAction>>) -> Box<dyn Heuristic> {
        match self {
            HeuristicMode::Dijkstra => Box::new(ZeroHeuristic::new()),
            HeuristicMode::WeightedGoalCounting => Box::new(GoalCounting::new()),
            HeuristicMode::RelaxedPlan => Box::new(RelaxedPlanHeuristic::new(ground_actions)),
        }
    }
}
