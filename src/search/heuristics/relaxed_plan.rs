use crate::search::{GroundAction, Heuristic, HeuristicValue, State, Task};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

/// The length of an optimal plan for the delete relaxation of the problem,
/// computed by a full inner Dijkstra from the evaluated state. Relaxed states
/// only grow, so the inner search always terminates; if it exhausts its open
/// list the goal is unreachable even without deletions and the state is a
/// dead end. Admissible with respect to the relaxation.
///
/// The estimate is recomputed from scratch for every evaluated state; nothing
/// is cached across outer expansions.
#[derive(Debug)]
pub struct RelaxedPlanHeuristic {
    ground_actions: Rc<Vec<GroundAction>>,
}

struct RelaxedNode {
    state: State,
    g: f64,
    closed: bool,
}

/// Open-list entry of the inner Dijkstra, ordered for a min-heap on g with
/// insertion-order tie-breaking.
#[derive(PartialEq)]
struct InnerEntry {
    g: HeuristicValue,
    order: usize,
    node: usize,
}

impl Eq for InnerEntry {}

impl Ord for InnerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum; invert so the smallest g wins.
        other
            .g
            .cmp(&self.g)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for InnerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RelaxedPlanHeuristic {
    pub fn new(ground_actions: Rc<Vec<GroundAction>>) -> Self {
        Self { ground_actions }
    }
}

impl Heuristic for RelaxedPlanHeuristic {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        let mut nodes = vec![RelaxedNode {
            state: state.clone(),
            g: 0.,
            closed: false,
        }];
        let mut registered: HashMap<String, usize> = HashMap::new();
        registered.insert(state.canonical(), 0);

        let mut open = BinaryHeap::new();
        let mut next_order = 0;
        open.push(InnerEntry {
            g: (0.).into(),
            order: next_order,
            node: 0,
        });

        while let Some(entry) = open.pop() {
            if nodes[entry.node].closed {
                continue;
            }
            nodes[entry.node].closed = true;

            if task.goal().is_satisfied(&nodes[entry.node].state) {
                return nodes[entry.node].g.into();
            }

            let current = nodes[entry.node].state.clone();
            let successor_g = nodes[entry.node].g + 1.;
            for action in self.ground_actions.iter() {
                if !current.satisfies(action.preconditions()) {
                    continue;
                }
                let successor = current.apply_relaxed(action.effects());
                let key = successor.canonical();
                let node = match registered.get(&key).copied() {
                    Some(existing) => {
                        if nodes[existing].closed || successor_g >= nodes[existing].g {
                            continue;
                        }
                        nodes[existing].g = successor_g;
                        existing
                    }
                    None => {
                        nodes.push(RelaxedNode {
                            state: successor,
                            g: successor_g,
                            closed: false,
                        });
                        registered.insert(key, nodes.len() - 1);
                        nodes.len() - 1
                    }
                };
                next_order += 1;
                open.push(InnerEntry {
                    g: successor_g.into(),
                    order: next_order,
                    node,
                });
            }
        }

        // The goal is unreachable even with deletions ignored.
        f64::INFINITY.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ground_all;
    use crate::test_utils::*;

    fn evaluate_initial(problem_text: &str) -> HeuristicValue {
        let task = Task::from_text(problem_text).unwrap();
        let ground_actions = Rc::new(ground_all(task.action_schemas(), task.symbols()));
        let mut heuristic = RelaxedPlanHeuristic::new(ground_actions);
        heuristic.evaluate(task.initial_state(), &task)
    }

    #[test]
    fn blocks_trivial_needs_one_action() {
        assert_eq!(evaluate_initial(BLOCKS_TRIVIAL_TEXT), HeuristicValue::from(1.0));
    }

    #[test]
    fn detour_relaxation_needs_two_actions() {
        assert_eq!(evaluate_initial(DETOUR_TEXT), HeuristicValue::from(2.0));
    }

    #[test]
    fn satisfied_goal_is_zero() {
        assert_eq!(evaluate_initial(BLOCKS_SATISFIED_TEXT), HeuristicValue::from(0.0));
    }

    #[test]
    fn unreachable_goal_is_infinite() {
        assert!(evaluate_initial(UNREACHABLE_TEXT).is_infinite());
    }
}
