use crate::parsed_types::{Atom as ParsedAtom, Literal, Name, PredicateName};
use crate::search::{Atom, Negatable};

/// One argument slot of a lifted condition. Arguments that name a schema
/// parameter are resolved to the parameter's position; anything else is a
/// constant symbol carried through grounding unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaArgument {
    Free(usize),
    Constant(Name),
}

/// A lifted condition: the same structure as [`Atom`], but with arguments
/// drawn from a schema's parameter list or from the symbol universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSchema {
    predicate: PredicateName,
    arguments: Vec<SchemaArgument>,
}

impl AtomSchema {
    /// Builds a lifted condition from a parsed atom, scanning `parameters`
    /// by name to decide which argument slots are free.
    pub fn from_parsed(atom: &ParsedAtom, parameters: &[Name]) -> Self {
        let arguments = atom
            .values()
            .iter()
            .map(
                |value| match parameters.iter().position(|param| param == value) {
                    Some(index) => SchemaArgument::Free(index),
                    None => SchemaArgument::Constant(value.clone()),
                },
            )
            .collect();

        Self {
            predicate: atom.predicate_name().clone(),
            arguments,
        }
    }

    /// Substitutes the binding tuple into the free slots, yielding a ground
    /// atom. `binding` must cover every free index.
    pub fn ground(&self, binding: &[Name]) -> Atom {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| match argument {
                SchemaArgument::Free(index) => binding[*index].clone(),
                SchemaArgument::Constant(name) => name.clone(),
            })
            .collect();
        Atom::new(self.predicate.clone(), arguments)
    }

    #[inline(always)]
    pub fn predicate(&self) -> &PredicateName {
        &self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[SchemaArgument] {
        &self.arguments
    }
}

impl Negatable<AtomSchema> {
    pub fn from_literal(literal: &Literal, parameters: &[Name]) -> Self {
        Negatable::new(
            literal.is_negated(),
            AtomSchema::from_parsed(literal.atom(), parameters),
        )
    }

    /// Grounds the wrapped schema, preserving polarity.
    pub fn ground(&self, binding: &[Name]) -> Negatable<Atom> {
        self.map(|schema| schema.ground(binding))
    }

    #[inline(always)]
    pub fn predicate(&self) -> &PredicateName {
        self.underlying().predicate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Literal;
    use crate::parsers::Parser;

    fn literal(text: &str) -> Literal {
        Literal::from_str(text).unwrap()
    }

    #[test]
    fn resolves_parameters_and_constants() {
        let parameters = [Name::new("x"), Name::new("y")];
        let schema = AtomSchema::from_parsed(literal("On(x,Table)").atom(), &parameters);
        assert_eq!(
            schema.arguments(),
            [
                SchemaArgument::Free(0),
                SchemaArgument::Constant(Name::new("Table"))
            ]
        );
    }

    #[test]
    fn grounding_substitutes_positionally() {
        let parameters = [Name::new("x"), Name::new("y")];
        let schema = Negatable::<AtomSchema>::from_literal(&literal("!On(y,x)"), &parameters);
        let ground = schema.ground(&[Name::new("A"), Name::new("B")]);
        assert_eq!(ground.to_string(), "!On(B,A)");
    }
}
