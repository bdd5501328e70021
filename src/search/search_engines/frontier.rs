//! Open lists of the search engines.

use crate::search::search_engines::NodeId;
use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt::Debug;

pub trait Frontier: Debug {
    /// Adds a node, or lowers the priority of a node already in the frontier.
    fn push(&mut self, node: NodeId, priority: HeuristicValue);

    fn pop(&mut self) -> Option<NodeId>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// First in, first out. Priorities are ignored.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeId, _priority: HeuristicValue) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Lowest priority first; ties go to the node pushed first. Pushing a node
/// that is already present replaces its priority and its place among ties.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    pushed: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: NodeId, priority: HeuristicValue) {
        self.queue.push(node, Reverse((priority, self.pushed)));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node, _)| node)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn drain(frontier: &mut dyn Frontier) -> Vec<usize> {
        let mut order = vec![];
        while let Some(node) = frontier.pop() {
            order.push(node.0);
        }
        order
    }

    #[test]
    fn fifo_ignores_priorities() {
        let mut frontier = FifoFrontier::new();
        frontier.push(NodeId(3), OrderedFloat(5.));
        frontier.push(NodeId(1), OrderedFloat(0.));
        assert_eq!(frontier.len(), 2);
        assert_eq!(drain(&mut frontier), vec![3, 1]);
    }

    #[test]
    fn priority_ties_break_by_insertion() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId(4), OrderedFloat(1.));
        frontier.push(NodeId(2), OrderedFloat(0.));
        frontier.push(NodeId(7), OrderedFloat(1.));
        frontier.push(NodeId(5), OrderedFloat(0.));
        assert_eq!(drain(&mut frontier), vec![2, 5, 4, 7]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn pushing_again_updates_the_priority() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId(0), OrderedFloat(3.));
        frontier.push(NodeId(1), OrderedFloat(2.));
        frontier.push(NodeId(0), OrderedFloat(1.));
        assert_eq!(frontier.len(), 2);
        assert_eq!(drain(&mut frontier), vec![0, 1]);
    }
}
