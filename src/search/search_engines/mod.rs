mod frontier;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use search_engine::{search, SearchEngine, SearchStrategy};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{CancellationToken, TerminationCondition};

#[cfg(test)]
mod search_engine_tests;
