use crate::search::{Heuristic, HeuristicValue, State, Task};

/// The all-zero heuristic. Degrades the search to uniform-cost (Dijkstra)
/// expansion, which is optimal.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        (0.).into()
    }
}
