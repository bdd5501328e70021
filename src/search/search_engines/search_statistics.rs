use crate::search::HeuristicValue;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes evaluated
    evaluated_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of open nodes moved to a cheaper path
    reopened_nodes: usize,
    /// Number of applicable operators generated
    generated_actions: usize,
    /// Lowest heuristic value seen so far
    best_heuristic_value: Option<f64>,
    /// Seconds from the start to the end of the search
    search_duration: f64,
    /// Time when the search started
    #[serde(skip)]
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    #[serde(skip)]
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            generated_actions: 0,
            best_heuristic_value: None,
            search_duration: 0.,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions;
        self.log_if_needed();
    }

    pub fn register_heuristic_value(&mut self, h: HeuristicValue) {
        if self.best_heuristic_value.map_or(true, |best| h.0 < best) {
            self.best_heuristic_value = Some(h.0);
            info!(best_heuristic_value = h.0, expanded_nodes = self.expanded_nodes);
        }
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            generated_actions = self.generated_actions,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        self.search_duration = self.search_start_time.elapsed().as_secs_f64();
        info!(search_duration = self.search_duration);
    }
}
