use crate::search::states::State;
use crate::search::successor_generators::SuccessorGenerator;
use crate::search::{Atom, GroundOperators};
use std::collections::BTreeMap;

/// Indexes operators by the first positive literal of their precondition, so
/// that only operators whose indexed atom holds are tested. Operators without
/// positive literals are always tested.
#[derive(Debug)]
pub struct IndexedSuccessorGenerator {
    by_atom: BTreeMap<Atom, Vec<usize>>,
    unindexed: Vec<usize>,
}

impl IndexedSuccessorGenerator {
    pub fn new(operators: &GroundOperators) -> Self {
        let mut by_atom: BTreeMap<Atom, Vec<usize>> = BTreeMap::new();
        let mut unindexed = vec![];
        for (index, operator) in operators.iter().enumerate() {
            match operator
                .precondition()
                .literals()
                .iter()
                .find(|literal| !literal.is_negated())
            {
                Some(literal) => by_atom
                    .entry(literal.underlying().clone())
                    .or_default()
                    .push(index),
                None => unindexed.push(index),
            }
        }
        Self { by_atom, unindexed }
    }
}

impl SuccessorGenerator for IndexedSuccessorGenerator {
    fn applicable_operators(&self, state: &State, operators: &GroundOperators) -> Vec<usize> {
        let mut candidates: Vec<usize> = self
            .by_atom
            .iter()
            .filter(|(atom, _)| state.contains(atom))
            .flat_map(|(_, indices)| indices.iter().copied())
            .chain(self.unindexed.iter().copied())
            .collect();
        candidates.sort_unstable();
        candidates.retain(|&index| operators[index].is_applicable(state));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::successor_generators::NaiveSuccessorGenerator;
    use crate::search::{ground, Task};
    use crate::test_utils::*;

    #[test]
    fn agrees_with_naive_generator_along_a_walk() {
        let task = Task::from_text(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT).unwrap();
        let operators = ground(&task, 100_000).unwrap();
        let naive = NaiveSuccessorGenerator::new();
        let indexed = IndexedSuccessorGenerator::new(&operators);

        // always follow the last applicable operator for a few steps
        let mut state = task.initial_state().clone();
        for _ in 0..6 {
            let expected = naive.applicable_operators(&state, &operators);
            assert_eq!(indexed.applicable_operators(&state, &operators), expected);
            let Some(&last) = expected.last() else {
                break;
            };
            state = operators[last].apply_unchecked(&state);
        }
    }
}
