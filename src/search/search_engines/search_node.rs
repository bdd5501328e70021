use crate::search::HeuristicValue;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

pub const NO_NODE: NodeId = NodeId(usize::MAX);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the cost of the best known path to it.
    g: f64,
    /// H-value of the node. Zero unless the search evaluates a heuristic.
    h: HeuristicValue,
    /// Index of the operator that led to this node
    operator: Option<usize>,
    parent_id: NodeId,
}

impl SearchNode {
    pub fn new_without_parent() -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: f64::INFINITY,
            h: OrderedFloat(f64::INFINITY),
            operator: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(parent_id: NodeId, operator: usize) -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: f64::INFINITY,
            h: OrderedFloat(f64::INFINITY),
            operator: Some(operator),
            parent_id,
        }
    }

    pub fn open(&mut self, g: f64, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Redirects an open node to a cheaper path.
    pub fn update_parent(&mut self, parent_id: NodeId, operator: usize, g: f64) {
        debug_assert_eq!(self.status, SearchNodeStatus::Open);
        debug_assert!(g < self.g);
        self.parent_id = parent_id;
        self.operator = Some(operator);
        self.g = g;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> HeuristicValue {
        self.h
    }

    pub fn operator(&self) -> Option<usize> {
        self.operator
    }

    pub fn parent_id(&self) -> NodeId {
        self.parent_id
    }
}
