//! State evaluators used to order the open list of best-first searches.

use crate::search::states::State;
use crate::search::Task;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use std::fmt::Debug;
use strum_macros::{Display, EnumIter};

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimates the cost of reaching the goal of `task` from `state`.
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StateHeuristicNames {
    #[default]
    #[clap(help = "The number of unsatisfied goal literals.")]
    GoalCounting,
    #[clap(name = "zero", help = "Zero everywhere, turning gbfs into a blind search.")]
    #[serde(rename = "zero")]
    #[strum(serialize = "zero")]
    ZeroHeuristic,
}

impl StateHeuristicNames {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            StateHeuristicNames::GoalCounting => Box::new(GoalCounting),
            StateHeuristicNames::ZeroHeuristic => Box::new(ZeroHeuristic),
        }
    }
}

/// Counts the goal literals that do not hold.
#[derive(Debug, Default)]
pub struct GoalCounting;

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        OrderedFloat(task.goal().count_unsatisfied(state) as f64)
    }
}

#[derive(Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        OrderedFloat(0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Name;
    use crate::search::{object_tuple, Atom};
    use crate::test_utils::*;

    #[test]
    fn goal_counting_on_initial_state() {
        let task = Task::from_text(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT).unwrap();
        let mut heuristic = StateHeuristicNames::GoalCounting.create();
        assert_eq!(heuristic.evaluate(task.initial_state(), &task), OrderedFloat(2.0));
    }

    #[test]
    fn goal_counting_drops_with_progress() {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM_TEXT).unwrap();
        let mut heuristic = GoalCounting;
        assert_eq!(heuristic.evaluate(task.initial_state(), &task), OrderedFloat(1.0));

        let symbols = task.symbols();
        let on = symbols.predicate_index(&Name::new("on"), 2).unwrap();
        let b = symbols.object_index(&Name::new("b")).unwrap();
        let c = symbols.object_index(&Name::new("c")).unwrap();
        let goal_state = task
            .initial_state()
            .apply_delta(&[], &[Atom::new(on, object_tuple![b, c])]);
        assert_eq!(heuristic.evaluate(&goal_state, &task), OrderedFloat(0.0));
    }

    #[test]
    fn zero_is_zero() {
        let task = Task::from_text(DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT).unwrap();
        let mut heuristic = StateHeuristicNames::ZeroHeuristic.create();
        assert_eq!(heuristic.evaluate(task.initial_state(), &task), OrderedFloat(0.0));
    }
}
