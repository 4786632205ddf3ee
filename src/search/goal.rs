use crate::search::{Atom, State};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// The goal of a task: ground atoms that must all hold in a state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Goal {
    atoms: BTreeSet<Atom>,
}

impl Goal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, atom: Atom) {
        self.atoms.insert(atom);
    }

    pub fn remove(&mut self, atom: &Atom) {
        self.atoms.remove(atom);
    }

    /// Returns true iff the goal is a subset of the state.
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.atoms.iter().all(|atom| state.contains(atom))
    }

    /// The number of goal atoms absent from the state.
    pub fn count_unsatisfied(&self, state: &State) -> usize {
        self.atoms
            .iter()
            .filter(|atom| !state.contains(atom))
            .count()
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

impl FromIterator<Atom> for Goal {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl Display for Goal {
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

    #[test]
    fn satisfaction_is_subset() {
        let goal: Goal = [atom("On", &["A", "B"])].into_iter().collect();
        let reached: State = [atom("On", &["A", "B"]), atom("Clear", &["C"])]
            .into_iter()
            .collect();
        let missed: State = [atom("Clear", &["C"])].into_iter().collect();

        assert!(goal.is_satisfied(&reached));
        assert!(!goal.is_satisfied(&missed));
        assert_eq!(goal.count_unsatisfied(&missed), 1);
    }

    #[test]
    fn empty_goal_is_always_satisfied() {
        assert!(Goal::new().is_satisfied(&State::new()));
    }
}
