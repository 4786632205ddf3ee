use crate::parsed_types::{ActionName, Literal, Name, PredicateName, Problem};
use crate::parsers::{parse_problem, strip_whitespace, Span};
use crate::search::{ActionSchema, Atom, Goal, Negatable, State};
use itertools::Itertools;
use nom::combinator::all_consuming;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// A malformed problem or plan. All variants are fatal for the current run;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problem file: {0}")]
    Parse(String),
    #[error("unknown symbol `{symbol}` in `{atom}`")]
    UnknownSymbol { symbol: Name, atom: String },
    #[error("predicate `{predicate}` used with arity {found}, expected {expected}")]
    ArityMismatch {
        predicate: PredicateName,
        expected: usize,
        found: usize,
    },
    #[error("action `{action}` declares parameter `{parameter}` more than once")]
    DuplicateParameter { action: ActionName, parameter: Name },
    #[error("no action `{name}` of arity {arity} in the problem")]
    UnknownAction { name: ActionName, arity: usize },
}

/// A validated planning task: the symbol universe, the initial state, the
/// goal and the action schemas. Built once from a parsed [`Problem`] and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Task {
    symbols: Vec<Name>,
    initial_state: State,
    goal: Goal,
    action_schemas: Vec<ActionSchema>,
}

impl Task {
    pub fn from_path(path: &Path) -> Result<Self, TaskError> {
        let text = fs::read_to_string(path).map_err(|source| TaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, TaskError> {
        let stripped = strip_whitespace(text);
        let (_, problem) = all_consuming(parse_problem)(Span::new(&stripped))
            .map_err(|e| TaskError::Parse(e.to_string()))?;
        Self::new(&problem)
    }

    pub fn new(problem: &Problem) -> Result<Self, TaskError> {
        // Deduplicate while keeping declaration order; grounding depends on a
        // stable symbol iteration order.
        let mut symbols = Vec::new();
        let mut symbol_set = HashSet::new();
        for symbol in problem.symbols() {
            if symbol_set.insert(symbol.clone()) {
                symbols.push(symbol.clone());
            }
        }

        let mut arities: HashMap<PredicateName, usize> = HashMap::new();

        let mut initial_state = State::new();
        for literal in problem.init() {
            let atom = ground_atom(literal, &symbol_set, &mut arities)?;
            // A negated literal here removes the condition accumulated so far.
            if literal.is_negated() {
                initial_state.remove(&atom);
            } else {
                initial_state.insert(atom);
            }
        }

        let mut goal = Goal::new();
        for literal in problem.goals() {
            let atom = ground_atom(literal, &symbol_set, &mut arities)?;
            if literal.is_negated() {
                goal.remove(&atom);
            } else {
                goal.insert(atom);
            }
        }

        let mut action_schemas = Vec::with_capacity(problem.actions().len());
        for definition in problem.actions() {
            let mut seen = HashSet::new();
            for parameter in definition.parameters() {
                if !seen.insert(parameter.clone()) {
                    return Err(TaskError::DuplicateParameter {
                        action: definition.name().clone(),
                        parameter: parameter.clone(),
                    });
                }
            }

            let parameter_set: HashSet<&Name> = definition.parameters().iter().collect();
            for literal in definition
                .preconditions()
                .iter()
                .chain(definition.effects())
            {
                check_arity(literal, &mut arities)?;
                for value in literal.atom().values() {
                    // Arguments that are not parameters are constants and
                    // must come from the declared universe.
                    if !parameter_set.contains(value) && !symbol_set.contains(value) {
                        return Err(TaskError::UnknownSymbol {
                            symbol: value.clone(),
                            atom: Negatable::<Atom>::from_parsed(
                                literal.atom(),
                                literal.is_negated(),
                            )
                            .to_string(),
                        });
                    }
                }
            }

            action_schemas.push(ActionSchema::new(definition));
        }

        info!(
            num_symbols = symbols.len(),
            num_action_schemas = action_schemas.len(),
            initial_state_size = initial_state.len(),
            goal_size = goal.len(),
        );

        Ok(Self {
            symbols,
            initial_state,
            goal,
            action_schemas,
        })
    }

    pub fn symbols(&self) -> &[Name] {
        &self.symbols
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn action_schemas(&self) -> &[ActionSchema] {
        &self.action_schemas
    }
}

/// Converts a ground literal into an [`Atom`], checking that its arguments
/// are declared symbols and that the predicate's arity is consistent with
/// every earlier appearance.
fn ground_atom(
    literal: &Literal,
    symbol_set: &HashSet<Name>,
    arities: &mut HashMap<PredicateName, usize>,
) -> Result<Atom, TaskError> {
    check_arity(literal, arities)?;
    for value in literal.atom().values() {
        if !symbol_set.contains(value) {
            return Err(TaskError::UnknownSymbol {
                symbol: value.clone(),
                atom: Negatable::<Atom>::from_parsed(literal.atom(), literal.is_negated())
                    .to_string(),
            });
        }
    }
    Ok(Atom::from_parsed(literal.atom()))
}

/// The first appearance of a predicate fixes its arity; later appearances
/// anywhere in the problem must agree.
fn check_arity(
    literal: &Literal,
    arities: &mut HashMap<PredicateName, usize>,
) -> Result<(), TaskError> {
    let predicate = literal.atom().predicate_name();
    let found = literal.atom().values().len();
    match arities.get(predicate).copied() {
        Some(expected) if expected != found => Err(TaskError::ArityMismatch {
            predicate: predicate.clone(),
            expected,
            found,
        }),
        Some(_) => Ok(()),
        None => {
            arities.insert(predicate.clone(), found);
            Ok(())
        }
    }
}

impl Display for Task {
    /// Prints the task back in the problem-file shape, used by the planner's
    /// `--echo` flag.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbols: {}", self.symbols.iter().join(","))?;
        writeln!(f, "InitialConditions: {}", self.initial_state)?;
        writeln!(f, "GoalConditions: {}", self.goal)?;
        writeln!(f, "Actions:")?;
        for (i, schema) in self.action_schemas.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{schema}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::BLOCKS_TRIVIAL_TEXT;

    #[test]
    fn builds_blocksworld() {
        let task = Task::from_text(BLOCKS_TRIVIAL_TEXT).unwrap();
        assert_eq!(task.symbols().len(), 3);
        assert_eq!(task.initial_state().len(), 6);
        assert_eq!(task.goal().len(), 1);
        assert_eq!(task.action_schemas().len(), 3);
    }

    #[test]
    fn negated_initial_literal_removes() {
        let task = Task::from_text(
            "Symbols:A,B\nInitialConditions:P(A)P(B)!P(A)\nGoalConditions:P(B)\nActions:",
        )
        .unwrap();
        assert_eq!(task.initial_state().to_string(), "P(B)");
    }

    #[test]
    fn negated_goal_literal_removes() {
        let task = Task::from_text(
            "Symbols:A,B\nInitialConditions:P(A)\nGoalConditions:P(A)P(B)!P(B)\nActions:",
        )
        .unwrap();
        assert_eq!(task.goal().to_string(), "P(A)");
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let result = Task::from_text(
            "Symbols:A\nInitialConditions:P(A)P(B)\nGoalConditions:P(A)\nActions:",
        );
        assert!(matches!(
            result,
            Err(TaskError::UnknownSymbol { symbol, .. }) if symbol == "B"
        ));
    }

    #[test]
    fn unknown_constant_in_schema_is_rejected() {
        let result = Task::from_text(
            "Symbols:A\nInitialConditions:P(A)\nGoalConditions:P(A)\nActions:\nGo(x)\nPreconditions:On(x,Nowhere)\nEffects:P(x)",
        );
        assert!(matches!(
            result,
            Err(TaskError::UnknownSymbol { symbol, .. }) if symbol == "Nowhere"
        ));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let result = Task::from_text(
            "Symbols:A,B\nInitialConditions:P(A)\nGoalConditions:P(A,B)\nActions:",
        );
        assert!(matches!(
            result,
            Err(TaskError::ArityMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let result = Task::from_text(
            "Symbols:A,B\nInitialConditions:P(A)\nGoalConditions:P(B)\nActions:\nGo(x,x)\nPreconditions:P(x)\nEffects:P(x)",
        );
        assert!(matches!(result, Err(TaskError::DuplicateParameter { .. })));
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let result = Task::from_text("Symbols:A,B\nGoalConditions:P(A)\nActions:");
        assert!(matches!(result, Err(TaskError::Parse(_))));
    }

    #[test]
    fn echo_round_trips() {
        let task = Task::from_text(BLOCKS_TRIVIAL_TEXT).unwrap();
        let echoed = Task::from_text(&task.to_string()).unwrap();
        assert_eq!(echoed.initial_state(), task.initial_state());
        assert_eq!(echoed.goal(), task.goal());
        assert_eq!(echoed.action_schemas(), task.action_schemas());
    }
}
