//! The planning core: the symbolic model, the grounder, the state algebra
//! and the search engine.

mod action;
mod action_schema;
mod atom;
mod atom_schema;
mod goal;
mod grounder;
pub mod heuristics;
mod negatable;
mod plan;
pub mod search_engines;
mod state;
mod task;
mod validate;
mod verbosity;

pub use action::GroundAction;
pub use action_schema::ActionSchema;
pub use atom::{Arguments, Atom};
pub use atom_schema::{AtomSchema, SchemaArgument};
pub use goal::Goal;
pub use grounder::ground_all;
pub use heuristics::{Heuristic, HeuristicMode, HeuristicValue};
pub use negatable::Negatable;
pub use plan::Plan;
pub use search_engines::{Astar, SearchResult, SearchStatistics, TerminationCondition};
pub use state::State;
pub use task::{Task, TaskError};
pub use validate::validate;
pub use verbosity::Verbosity;
