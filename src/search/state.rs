//! World states and the state algebra: precondition check, effect
//! application and canonical serialization.

use crate::search::{Atom, Negatable};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// A world state: the set of ground atoms currently true. The semantics is
/// closed-world, so an atom is true exactly when it is a member of the set;
/// negative atoms never appear in a state.
///
/// States are values. Applying an effect set produces a new state and never
/// mutates the original, which is what lets the search engine keep popped
/// states immutable in its open and closed bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct State {
    atoms: BTreeSet<Atom>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn insert(&mut self, atom: Atom) {
        self.atoms.insert(atom);
    }

    pub fn remove(&mut self, atom: &Atom) {
        self.atoms.remove(atom);
    }

    /// Returns true iff every precondition is a member of the state, with
    /// polarity part of the identity being matched. States store positive
    /// atoms only, so a negative precondition never holds.
    pub fn satisfies(&self, preconditions: &[Negatable<Atom>]) -> bool {
        preconditions
            .iter()
            .all(|precondition| match precondition {
                Negatable::Positive(atom) => self.atoms.contains(atom),
                Negatable::Negative(_) => false,
            })
    }

    /// Applies an effect set: positive effects are inserted, negative effects
    /// delete the matching positive atom. The input state is unchanged.
    pub fn apply(&self, effects: &[Negatable<Atom>]) -> State {
        let mut successor = self.clone();
        for effect in effects {
            match effect {
                Negatable::Positive(atom) => {
                    successor.atoms.insert(atom.clone());
                }
                Negatable::Negative(atom) => {
                    successor.atoms.remove(atom);
                }
            }
        }
        successor
    }

    /// Applies an effect set under the delete relaxation: positive effects
    /// are inserted and negative effects are ignored, so states only grow.
    pub fn apply_relaxed(&self, effects: &[Negatable<Atom>]) -> State {
        let mut successor = self.clone();
        for effect in effects {
            if let Negatable::Positive(atom) = effect {
                successor.atoms.insert(atom.clone());
            }
        }
        successor
    }

    /// The deterministic serialization of the state: the canonical strings of
    /// its atoms, concatenated in sorted order. Two states have equal
    /// canonical forms iff they are equal as sets; the search engine keys its
    /// open, closed and parent bookkeeping on this.
    ///
    /// The atom set already iterates in an order consistent with the
    /// lexicographic order of the printed forms, see [`Atom`].
    pub fn canonical(&self) -> String {
        let mut key = String::new();
        for atom in &self.atoms {
            key.push_str(&atom.to_string());
        }
        key
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl FromIterator<Atom> for State {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Name, PredicateName};

    fn atom(predicate: &str, arguments: &[&str]) -> Atom {
        Atom::new(
            PredicateName::from(predicate),
            arguments.iter().map(|name| Name::new(*name)).collect(),
        )
    }

    fn state(atoms: &[Atom]) -> State {
        atoms.iter().cloned().collect()
    }

    #[test]
    fn satisfies_is_subset() {
        let s = state(&[atom("On", &["A", "Table"]), atom("Clear", &["A"])]);
        assert!(s.satisfies(&[Negatable::Positive(atom("Clear", &["A"]))]));
        assert!(!s.satisfies(&[Negatable::Positive(atom("Clear", &["B"]))]));
        assert!(s.satisfies(&[]));
    }

    #[test]
    fn negative_preconditions_never_hold() {
        // Matching is by membership including polarity, and states carry
        // positive atoms only, so even an absent atom does not satisfy its
        // negation.
        let s = state(&[atom("On", &["A", "Table"])]);
        assert!(!s.satisfies(&[Negatable::Negative(atom("Clear", &["B"]))]));
        assert!(!s.satisfies(&[Negatable::Negative(atom("On", &["A", "Table"]))]));
    }

    #[test]
    fn apply_inserts_and_deletes() {
        let s = state(&[atom("On", &["A", "Table"]), atom("Clear", &["B"])]);
        let successor = s.apply(&[
            Negatable::Positive(atom("On", &["A", "B"])),
            Negatable::Negative(atom("On", &["A", "Table"])),
            Negatable::Negative(atom("Clear", &["B"])),
        ]);
        assert_eq!(
            successor,
            state(&[atom("On", &["A", "B"])])
        );
        // the original state is untouched
        assert!(s.contains(&atom("On", &["A", "Table"])));
    }

    #[test]
    fn relaxed_apply_never_deletes() {
        let s = state(&[atom("Clear", &["B"])]);
        let successor = s.apply_relaxed(&[
            Negatable::Positive(atom("On", &["A", "B"])),
            Negatable::Negative(atom("Clear", &["B"])),
        ]);
        assert!(successor.contains(&atom("Clear", &["B"])));
        assert!(successor.contains(&atom("On", &["A", "B"])));
    }

    #[test]
    fn canonical_ignores_insertion_order() {
        let forward = state(&[atom("Clear", &["A"]), atom("On", &["A", "B"])]);
        let mut backward = State::new();
        backward.insert(atom("On", &["A", "B"]));
        backward.insert(atom("Clear", &["A"]));
        assert_eq!(forward.canonical(), backward.canonical());
        assert_eq!(forward.canonical(), "Clear(A)On(A,B)");
    }

    #[test]
    fn canonical_separates_distinct_states() {
        let a = state(&[atom("On", &["A", "B"])]);
        let b = state(&[atom("On", &["B", "A"])]);
        assert_ne!(a.canonical(), b.canonical());
    }
}
