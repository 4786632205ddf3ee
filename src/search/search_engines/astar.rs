//! Best-first search over world states.

use crate::search::{
    search_engines::{
        NodeId, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    GroundAction, Heuristic, HeuristicValue, Task,
};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Every action costs the same; plan cost is plan length.
const EDGE_COST: f64 = 1.;

/// Weighted best-first search in the A*/Dijkstra family. The behaviour is
/// fixed by the heuristic: the zero heuristic gives Dijkstra and optimal
/// plans, an admissible estimate gives A*, an inadmissible one a greedy,
/// possibly suboptimal search.
///
/// The open list tolerates stale entries instead of supporting
/// decrease-key: re-opening a state pushes a second entry, and pops against
/// an already closed node are discarded. Closed nodes are never re-opened.
#[derive(Debug, Default)]
pub struct Astar {}

/// Open-list entry: f-value with insertion-order tie-breaking, ordered for a
/// min-heap. Ties broken by insertion order keep the search deterministic.
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    f: HeuristicValue,
    order: usize,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum; invert so the smallest f (and among
        // equals, the earliest insertion) is popped first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Astar {
    pub fn new() -> Self {
        Self {}
    }

    /// Searches for a shortest action sequence from the task's initial state
    /// to a goal state, over the given ground action set.
    pub fn search(
        &self,
        task: &Task,
        ground_actions: &[GroundAction],
        mut heuristic: Box<dyn Heuristic>,
        mut termination: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut space = SearchSpace::new(task.initial_state().clone());
        let mut open = BinaryHeap::new();
        let mut next_order = 0;

        let root = space.root();
        let h = heuristic.evaluate(task.initial_state(), task);
        statistics.increment_evaluated_nodes();
        space.node_mut(root).open(0., h);
        open.push(OpenEntry {
            f: space.node(root).f(),
            order: next_order,
            node: root,
        });

        while let Some(entry) = open.pop() {
            termination.log_if_needed();
            if let Some(result) = termination.should_terminate() {
                termination.finalise();
                return (result, statistics);
            }

            // The queue may hold several entries for one state; everything
            // popped after the first is stale.
            if space.node(entry.node).status() == SearchNodeStatus::Closed {
                statistics.increment_pruned_duplicates();
                continue;
            }
            space.node_mut(entry.node).close();
            statistics.increment_expanded_nodes();

            let state = space.node(entry.node).state().clone();
            let g = space.node(entry.node).g();

            if task.goal().is_satisfied(&state) {
                debug!(g, reached_states = space.len(), "goal reached");
                termination.finalise();
                return (
                    SearchResult::Success(space.extract_plan(entry.node, ground_actions)),
                    statistics,
                );
            }

            let successor_g = g + EDGE_COST;
            for (action_index, action) in ground_actions.iter().enumerate() {
                if !state.satisfies(action.preconditions()) {
                    continue;
                }
                statistics.increment_generated_actions();

                let successor = state.apply(action.effects());
                let canonical = successor.canonical();

                let (node, h) = match space.find(&canonical) {
                    Some(existing) => {
                        match space.node(existing).status() {
                            // Closed g-values are final; dead ends stay dead.
                            SearchNodeStatus::Closed | SearchNodeStatus::Deadend => continue,
                            _ => {}
                        }
                        if successor_g >= space.node(existing).g() {
                            continue;
                        }
                        (existing, space.node(existing).h())
                    }
                    None => {
                        statistics.increment_generated_nodes();
                        let id = space.insert(canonical, successor.clone());
                        let h = heuristic.evaluate(&successor, task);
                        statistics.increment_evaluated_nodes();
                        if h.is_infinite() {
                            space.node_mut(id).mark_as_deadend();
                            continue;
                        }
                        (id, h)
                    }
                };

                space.node_mut(node).open(successor_g, h);
                space.node_mut(node).set_edge(entry.node, action_index);
                next_order += 1;
                open.push(OpenEntry {
                    f: space.node(node).f(),
                    order: next_order,
                    node,
                });
            }
        }

        termination.finalise();
        (SearchResult::Unsolvable, statistics)
    }
}
