use tracing::info;

/// Counters describing one search run.
#[derive(Debug, Default)]
pub struct SearchStatistics {
    /// Number of nodes expanded.
    pub expanded_nodes: usize,
    /// Number of heuristic evaluations performed.
    pub evaluated_nodes: usize,
    /// Number of distinct states generated (excluding the initial state).
    pub generated_nodes: usize,
    /// Number of stale open-list entries discarded on pop.
    pub pruned_duplicates: usize,
    /// Number of applicable ground actions seen during expansion.
    pub generated_actions: usize,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_pruned_duplicates(&mut self) {
        self.pruned_duplicates += 1;
    }

    pub fn increment_generated_actions(&mut self) {
        self.generated_actions += 1;
    }

    pub fn finalise_search(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            pruned_duplicates = self.pruned_duplicates,
            generated_actions = self.generated_actions,
        );
    }
}
