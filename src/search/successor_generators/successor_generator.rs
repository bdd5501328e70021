use crate::search::states::State;
use crate::search::successor_generators::{IndexedSuccessorGenerator, NaiveSuccessorGenerator};
use crate::search::{GroundOperators, Operator};
use serde::Deserialize;
use std::fmt::Debug;
use strum_macros::Display;

/// A successor generator is responsible for finding the operators applicable
/// in a given state.
pub trait SuccessorGenerator: Debug {
    /// Indices into `operators` of the operators applicable in `state`, in
    /// ascending order.
    fn applicable_operators(&self, state: &State, operators: &GroundOperators) -> Vec<usize>;
}

/// The successors of `state` as `(operator index, successor state)` pairs.
/// Successor states are only computed as the iterator advances.
pub fn successors<'a>(
    generator: &dyn SuccessorGenerator,
    operators: &'a GroundOperators,
    state: &'a State,
) -> impl Iterator<Item = (usize, State)> + 'a {
    generator
        .applicable_operators(state, operators)
        .into_iter()
        .map(move |index| {
            let operator: &Operator = &operators[index];
            (index, operator.apply_unchecked(state))
        })
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SuccessorGeneratorName {
    #[clap(help = "Test every operator in every state.")]
    Naive,
    #[default]
    #[clap(help = "Only test operators whose first positive precondition atom holds.")]
    Indexed,
}

impl SuccessorGeneratorName {
    pub fn create(&self, operators: &GroundOperators) -> Box<dyn SuccessorGenerator> {
        match self {
            SuccessorGeneratorName::Naive => Box::new(NaiveSuccessorGenerator::new()),
            SuccessorGeneratorName::Indexed => Box::new(IndexedSuccessorGenerator::new(operators)),
        }
    }
}
