use crate::search::{
    search_engines::{NodeId, SearchNode},
    GroundAction, Plan, State,
};
use std::collections::HashMap;

/// The set of reached states: a node arena plus an index from canonical
/// state keys to node ids. Parent edges are ids into the same arena, so the
/// back-pointer graph needs no owning pointers; everything is dropped
/// together when the search returns.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: Vec<SearchNode>,
    registered: HashMap<String, NodeId>,
}

impl SearchSpace {
    /// Creates the space holding only the root node for `initial_state`.
    pub fn new(initial_state: State) -> Self {
        let canonical = initial_state.canonical();
        let root = SearchNode::new(initial_state);
        Self {
            nodes: vec![root],
            registered: HashMap::from([(canonical, 0)]),
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    /// Looks up the node registered for a canonical state key.
    pub fn find(&self, canonical: &str) -> Option<NodeId> {
        self.registered.get(canonical).copied()
    }

    /// Registers a newly reached state. The caller must have checked that
    /// the canonical key is not yet registered.
    pub fn insert(&mut self, canonical: String, state: State) -> NodeId {
        debug_assert!(!self.registered.contains_key(&canonical));
        let id = self.nodes.len();
        self.nodes.push(SearchNode::new(state));
        self.registered.insert(canonical, id);
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    /// Walks the parent edges from `goal` back to the root, collecting the
    /// actions taken, and reverses the result into execution order.
    pub fn extract_plan(&self, goal: NodeId, ground_actions: &[GroundAction]) -> Plan {
        let mut steps = Vec::new();
        let mut current = self.node(goal);
        while let Some(parent) = current.parent() {
            let action = current
                .action()
                .expect("non-root node must record its incoming action");
            steps.push(ground_actions[action].clone());
            current = self.node(parent);
        }
        steps.reverse();
        Plan::new(steps)
    }

    /// The number of distinct states reached.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
