use crate::search::heuristics::{Heuristic, HeuristicValue, StateHeuristicNames};
use crate::search::search_engines::{
    FifoFrontier, Frontier, PriorityFrontier, SearchNodeStatus, SearchSpace, SearchStatistics,
    TerminationCondition,
};
use crate::search::states::State;
use crate::search::successor_generators::{successors, SuccessorGeneratorName};
use crate::search::{GroundOperators, Plan, PlanningError, Task};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use strum_macros::{Display, EnumIter};
use tracing::info;

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    #[default]
    #[clap(help = "Breadth-first search, finds plans with the fewest steps.")]
    Bfs,
    #[clap(help = "Uniform-cost search, finds the cheapest plans.")]
    Ucs,
    #[clap(help = "Greedy best-first search on the heuristic value.")]
    Gbfs,
}

impl SearchStrategy {
    fn uses_heuristic(&self) -> bool {
        matches!(self, SearchStrategy::Gbfs)
    }

    /// Breadth-first search tests the goal when a node is generated, the
    /// other strategies when it is expanded.
    fn goal_test_on_generation(&self) -> bool {
        matches!(self, SearchStrategy::Bfs)
    }

    fn priority(&self, g: f64, h: HeuristicValue) -> HeuristicValue {
        match self {
            SearchStrategy::Bfs => OrderedFloat(0.),
            SearchStrategy::Ucs => OrderedFloat(g),
            SearchStrategy::Gbfs => h,
        }
    }

    fn frontier(&self) -> Box<dyn Frontier> {
        match self {
            SearchStrategy::Bfs => Box::new(FifoFrontier::new()),
            SearchStrategy::Ucs | SearchStrategy::Gbfs => Box::new(PriorityFrontier::new()),
        }
    }
}

/// A forward state-space search over ground operators with duplicate
/// detection on full state content.
#[derive(Debug)]
pub struct SearchEngine {
    strategy: SearchStrategy,
    successor_generator: SuccessorGeneratorName,
    heuristic: Box<dyn Heuristic>,
    termination: TerminationCondition,
}

impl SearchEngine {
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            successor_generator: SuccessorGeneratorName::default(),
            heuristic: StateHeuristicNames::default().create(),
            termination: TerminationCondition::default(),
        }
    }

    pub fn with_successor_generator(mut self, successor_generator: SuccessorGeneratorName) -> Self {
        self.successor_generator = successor_generator;
        self
    }

    /// Only used by greedy best-first search. The heuristic is kept across
    /// calls to [`SearchEngine::search`].
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_heuristic_name(self, heuristic: StateHeuristicNames) -> Self {
        self.with_heuristic(heuristic.create())
    }

    pub fn with_termination_condition(mut self, termination: TerminationCondition) -> Self {
        self.termination = termination;
        self
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn search(
        &mut self,
        task: &Task,
        operators: &GroundOperators,
    ) -> (Result<Plan, PlanningError>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        self.termination.restart();
        let result = self.run(task, operators, &mut statistics);
        statistics.finalise_search();
        self.termination.finalise();
        match &result {
            Ok(plan) => info!(plan_length = plan.len(), plan_cost = plan.cost(), "plan found"),
            Err(error) => info!(%error, "no plan found"),
        }
        (result, statistics)
    }

    fn evaluate(
        strategy: SearchStrategy,
        heuristic: &mut dyn Heuristic,
        state: &State,
        task: &Task,
        statistics: &mut SearchStatistics,
    ) -> HeuristicValue {
        if !strategy.uses_heuristic() {
            return OrderedFloat(0.);
        }
        let h = heuristic.evaluate(state, task);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(h);
        h
    }

    fn run(
        &mut self,
        task: &Task,
        operators: &GroundOperators,
        statistics: &mut SearchStatistics,
    ) -> Result<Plan, PlanningError> {
        let strategy = self.strategy;
        let generator = self.successor_generator.create(operators);
        let extract = |space: &SearchSpace, node| {
            Plan::new(
                space
                    .extract_plan(node)
                    .into_iter()
                    .map(|index| operators[index].clone())
                    .collect(),
            )
        };

        let mut frontier = strategy.frontier();
        let mut space = SearchSpace::new(task.initial_state().clone());
        let root = space.root_id();
        if strategy.goal_test_on_generation() && task.goal().is_satisfied(task.initial_state()) {
            return Ok(Plan::default());
        }
        let h = Self::evaluate(
            strategy,
            self.heuristic.as_mut(),
            task.initial_state(),
            task,
            statistics,
        );
        space.node_mut(root).open(0., h);
        frontier.push(root, strategy.priority(0., h));

        loop {
            if let Some(reason) = self.termination.should_terminate() {
                return Err(reason);
            }
            let Some(node_id) = frontier.pop() else {
                break;
            };
            let node = space.node_mut(node_id);
            if node.status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g = node.g();
            statistics.increment_expanded_nodes();

            let state = space.state(node_id).clone();
            if !strategy.goal_test_on_generation() && task.goal().is_satisfied(&state) {
                return Ok(extract(&space, node_id));
            }

            let mut num_actions = 0;
            for (index, successor) in successors(generator.as_ref(), operators, &state) {
                num_actions += 1;
                let child_g = g + operators[index].cost();
                let (child_id, created) =
                    space.insert_or_get_node(successor.clone(), index, node_id);
                if created {
                    statistics.increment_generated_nodes(1);
                    if strategy.goal_test_on_generation() && task.goal().is_satisfied(&successor)
                    {
                        return Ok(extract(&space, child_id));
                    }
                    let h = Self::evaluate(
                        strategy,
                        self.heuristic.as_mut(),
                        &successor,
                        task,
                        statistics,
                    );
                    space.node_mut(child_id).open(child_g, h);
                    frontier.push(child_id, strategy.priority(child_g, h));
                } else if strategy == SearchStrategy::Ucs {
                    let child = space.node_mut(child_id);
                    if child.status() == SearchNodeStatus::Open && child_g < child.g() {
                        child.update_parent(node_id, index, child_g);
                        let h = child.h();
                        statistics.increment_reopened_nodes();
                        frontier.push(child_id, strategy.priority(child_g, h));
                    }
                }
            }
            statistics.increment_generated_actions(num_actions);
        }

        Err(PlanningError::PlanNotFound)
    }
}

/// Searches with a fresh [`SearchEngine`]. Greedy best-first search uses goal
/// counting unless another heuristic is given.
pub fn search(
    task: &Task,
    operators: &GroundOperators,
    strategy: SearchStrategy,
    heuristic: Option<Box<dyn Heuristic>>,
    termination: Option<TerminationCondition>,
) -> Result<Plan, PlanningError> {
    let mut engine = SearchEngine::new(strategy);
    if let Some(heuristic) = heuristic {
        engine = engine.with_heuristic(heuristic);
    }
    if let Some(termination) = termination {
        engine = engine.with_termination_condition(termination);
    }
    engine.search(task, operators).0
}
