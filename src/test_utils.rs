use crate::search::{
    ground_all, Astar, HeuristicMode, Plan, SearchResult, SearchStatistics, Task,
    TerminationCondition,
};
use std::rc::Rc;

pub const BLOCKS_TRIVIAL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocks/trivial.txt"
));

pub const BLOCKS_REORDER_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocks/reorder.txt"
));

pub const BLOCKS_SATISFIED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocks/satisfied.txt"
));

pub const UNREACHABLE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/misc/unreachable.txt"
));

pub const DETOUR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/misc/detour.txt"
));

/// Grounds and searches `problem_text` with the given heuristic mode and no
/// resource limits.
pub fn run_search(problem_text: &str, mode: HeuristicMode) -> (SearchResult, SearchStatistics) {
    let task = Task::from_text(problem_text).expect("test problem should parse");
    let ground_actions = Rc::new(ground_all(task.action_schemas(), task.symbols()));
    let heuristic = mode.create(Rc::clone(&ground_actions));
    Astar::new().search(
        &task,
        &ground_actions,
        heuristic,
        TerminationCondition::new(None, None),
    )
}

/// Like [`run_search`], but panics unless a plan was found.
pub fn solve(problem_text: &str, mode: HeuristicMode) -> Plan {
    match run_search(problem_text, mode) {
        (SearchResult::Success(plan), _) => plan,
        (result, _) => panic!("expected a plan, got {result:?}"),
    }
}
