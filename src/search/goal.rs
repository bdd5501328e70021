use crate::parsed_types::NameLiteral;
use crate::search::states::State;
use crate::search::{Atom, Negatable, SymbolTable, TaskError};

/// The goal of a task: a conjunction of literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    atoms: Vec<Negatable<Atom>>,
}

impl Goal {
    pub fn new(goal: &[NameLiteral], symbols: &SymbolTable) -> Result<Self, TaskError> {
        let atoms = goal
            .iter()
            .map(|literal| Negatable::<Atom>::from_parsed(literal, symbols))
            .collect::<Result<_, _>>()?;

        Ok(Self { atoms })
    }

    /// Returns true if the goal is satisfied by the given state.
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.atoms.iter().all(|atom| state.satisfies(atom))
    }

    pub fn first_unsatisfied(&self, state: &State) -> Option<&Negatable<Atom>> {
        self.atoms.iter().find(|atom| !state.satisfies(atom))
    }

    pub fn count_unsatisfied(&self, state: &State) -> usize {
        self.atoms
            .iter()
            .filter(|atom| !state.satisfies(atom))
            .count()
    }

    pub fn atoms(&self) -> &[Negatable<Atom>] {
        &self.atoms
    }
}
