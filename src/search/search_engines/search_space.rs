use crate::search::search_engines::{NodeId, SearchNode, NO_NODE};
use crate::search::states::State;
use segvec::{Linear, SegVec};
use smallvec::SmallVec;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// The arena of search nodes. Every distinct state gets exactly one node;
/// states are compared by content. Each state is stored once, in `states`;
/// the index maps content hashes to the nodes whose states have that hash.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    registered_states: HashMap<u64, SmallVec<[NodeId; 1]>>,
    hasher: RandomState,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut space = Self {
            nodes: SegVec::new(),
            states: SegVec::new(),
            registered_states: HashMap::new(),
            hasher: RandomState::new(),
        };
        let hash = space.hasher.hash_one(&initial_state);
        space.register(hash, initial_state, SearchNode::new_without_parent());
        space
    }

    fn register(&mut self, hash: u64, state: State, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.registered_states.entry(hash).or_default().push(id);
        self.states.push(state);
        self.nodes.push(node);
        id
    }

    fn find(&self, hash: u64, state: &State) -> Option<NodeId> {
        self.registered_states
            .get(&hash)?
            .iter()
            .copied()
            .find(|&id| self.state(id) == state)
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node of `state`, creating it with the given parent if the
    /// state has not been seen before. The flag tells whether it was created.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        operator: usize,
        parent_id: NodeId,
    ) -> (NodeId, bool) {
        let hash = self.hasher.hash_one(&state);
        match self.find(hash, &state) {
            Some(id) => (id, false),
            None => (
                self.register(hash, state, SearchNode::new_with_parent(parent_id, operator)),
                true,
            ),
        }
    }

    /// The operator indices on the path from the root to the node.
    pub fn extract_plan(&self, node_id: NodeId) -> Vec<usize> {
        let mut plan = vec![];
        let mut current = self.node(node_id);
        while current.parent_id() != NO_NODE {
            plan.extend(current.operator());
            current = self.node(current.parent_id());
        }
        plan.reverse();
        plan
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.nodes.get(id.0).expect("Invalid node id")
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(id.0).expect("Invalid node id")
    }

    pub fn state(&self, id: NodeId) -> &State {
        self.states.get(id.0).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{object_tuple, Atom};

    #[test]
    fn states_are_registered_once() {
        let root = State::new(1);
        let child = root.apply_delta(&[], &[Atom::new(0, object_tuple![1])]);
        let mut space = SearchSpace::new(root.clone());

        let (first, created) = space.insert_or_get_node(child.clone(), 4, space.root_id());
        assert!(created);
        let (again, created) = space.insert_or_get_node(child, 7, space.root_id());
        assert!(!created);
        assert_eq!(first, again);
        let (root_again, created) = space.insert_or_get_node(root, 2, first);
        assert!(!created);
        assert_eq!(root_again, space.root_id());

        assert_eq!(space.len(), 2);
        assert_eq!(space.extract_plan(first), vec![4]);
        assert!(space.extract_plan(space.root_id()).is_empty());
    }

    #[test]
    fn colliding_hashes_keep_states_apart() {
        let root = State::new(1);
        let child = root.apply_delta(&[], &[Atom::new(0, object_tuple![1])]);
        let mut space = SearchSpace::new(root.clone());
        // file the child under the root's hash
        let hash = space.hasher.hash_one(&root);
        let node = SearchNode::new_with_parent(space.root_id(), 3);
        let child_id = space.register(hash, child.clone(), node);

        assert_eq!(space.find(hash, &root), Some(space.root_id()));
        assert_eq!(space.find(hash, &child), Some(child_id));
        assert_eq!(space.state(child_id), &child);
        assert_eq!(space.registered_states.len(), 1);
        assert_eq!(space.len(), 2);
    }
}
