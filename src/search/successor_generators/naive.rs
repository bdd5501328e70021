use crate::search::states::State;
use crate::search::successor_generators::SuccessorGenerator;
use crate::search::GroundOperators;

/// Tests the precondition of every operator.
#[derive(Debug, Default)]
pub struct NaiveSuccessorGenerator;

impl NaiveSuccessorGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SuccessorGenerator for NaiveSuccessorGenerator {
    fn applicable_operators(&self, state: &State, operators: &GroundOperators) -> Vec<usize> {
        operators
            .iter()
            .enumerate()
            .filter(|(_, operator)| operator.is_applicable(state))
            .map(|(index, _)| index)
            .collect()
    }
}
