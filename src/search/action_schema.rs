use crate::parsed_types::{ActionDefinition, ActionName, Name};
use crate::search::{atom_schema::SchemaArgument, AtomSchema, GroundAction, Negatable};
use std::fmt::{self, Display, Formatter};

/// A parameterized action template: lifted preconditions and effects over an
/// ordered parameter list. Binding every parameter to a symbol yields a
/// [`GroundAction`].
#[derive(Debug, Clone)]
pub struct ActionSchema {
    name: ActionName,
    parameters: Vec<Name>,
    preconditions: Vec<Negatable<AtomSchema>>,
    effects: Vec<Negatable<AtomSchema>>,
}

impl ActionSchema {
    pub fn new(definition: &ActionDefinition) -> Self {
        let parameters: Vec<Name> = definition.parameters().to_vec();
        let preconditions = definition
            .preconditions()
            .iter()
            .map(|literal| Negatable::<AtomSchema>::from_literal(literal, &parameters))
            .collect();
        let effects = definition
            .effects()
            .iter()
            .map(|literal| Negatable::<AtomSchema>::from_literal(literal, &parameters))
            .collect();

        Self {
            name: definition.name().clone(),
            parameters,
            preconditions,
            effects,
        }
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn parameters(&self) -> &[Name] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn preconditions(&self) -> &[Negatable<AtomSchema>] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[Negatable<AtomSchema>] {
        &self.effects
    }

    /// Instantiates the schema with a binding tuple, one symbol per
    /// parameter, grounding every precondition and effect.
    pub fn ground(&self, binding: &[Name]) -> GroundAction {
        debug_assert_eq!(binding.len(), self.arity());
        GroundAction::new(
            self.name.clone(),
            binding.iter().cloned().collect(),
            self.preconditions
                .iter()
                .map(|precondition| precondition.ground(binding))
                .collect(),
            self.effects
                .iter()
                .map(|effect| effect.ground(binding))
                .collect(),
        )
    }
}

/// Schemas are identified by name and arity.
impl PartialEq for ActionSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity() == other.arity()
    }
}

impl Eq for ActionSchema {}

impl Display for ActionSchema {
    /// Prints the schema in the problem-file shape: the head line followed by
    /// the `Preconditions:` and `Effects:` lines.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{parameter}")?;
        }
        writeln!(f, ")")?;
        write!(f, "Preconditions:")?;
        for precondition in &self.preconditions {
            write!(f, " ")?;
            self.fmt_condition(f, precondition)?;
        }
        writeln!(f)?;
        write!(f, "Effects:")?;
        for effect in &self.effects {
            write!(f, " ")?;
            self.fmt_condition(f, effect)?;
        }
        Ok(())
    }
}

impl ActionSchema {
    fn fmt_condition(&self, f: &mut Formatter<'_>, condition: &Negatable<AtomSchema>) -> fmt::Result {
        if condition.is_negated() {
            write!(f, "!")?;
        }
        write!(f, "{}(", condition.predicate())?;
        for (i, argument) in condition.underlying().arguments().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match argument {
                SchemaArgument::Free(index) => write!(f, "{}", self.parameters[*index])?,
                SchemaArgument::Constant(name) => write!(f, "{name}")?,
            }
        }
        write!(f, ")")
    }
}
