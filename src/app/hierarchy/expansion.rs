//! Expand/collapse state, kept apart from the domain nodes and keyed by node id.
//! Nodes are open unless collapsed.

use std::collections::HashSet;

use super::node::HierarchyNode;
use super::tree;
use crate::app::domain::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    collapsed: HashSet<NodeId>,
}

impl ExpansionState {
    pub fn is_open(&self, id: &NodeId) -> bool {
        !self.collapsed.contains(id)
    }

    /// Flip one node. Returns false (and does nothing) when the id is not in the forest.
    pub fn toggle_open(&mut self, forest: &[HierarchyNode], id: &NodeId) -> bool {
        if tree::find_node(forest, id).is_none() {
            return false;
        }
        if !self.collapsed.remove(id) {
            self.collapsed.insert(id.clone());
        }
        true
    }

    /// Open or close every node in the forest, at any depth.
    pub fn set_all(&mut self, forest: &[HierarchyNode], open: bool) {
        if open {
            self.collapsed.clear();
        } else {
            self.collapsed = tree::collect_ids(forest).into_iter().collect();
        }
    }

    pub fn expand(&mut self, id: &NodeId) {
        self.collapsed.remove(id);
    }

    /// Forget ids that no longer exist in the forest.
    pub fn retain(&mut self, forest: &[HierarchyNode]) {
        let live: HashSet<NodeId> = tree::collect_ids(forest).into_iter().collect();
        self.collapsed.retain(|id| live.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::hierarchy::node::{Forest, NewNode};

    fn deep_forest(depth: usize) -> Forest {
        let (mut f, root) = tree::add_sibling(&[], None, NewNode::named("level 0")).unwrap();
        let mut parent = root.id;
        for level in 1..depth {
            let (next, child) = tree::add_child(&f, &parent, NewNode::named(format!("level {level}"))).unwrap();
            f = next;
            parent = child.id;
        }
        let (f, _) = tree::add_sibling(&f, None, NewNode::named("second root")).unwrap();
        f
    }

    #[test]
    fn new_nodes_are_open() {
        let f = deep_forest(3);
        let state = ExpansionState::default();
        assert!(tree::collect_ids(&f).iter().all(|id| state.is_open(id)));
    }

    #[test]
    fn set_all_applies_at_every_depth() {
        let f = deep_forest(12);
        let ids = tree::collect_ids(&f);
        let mut state = ExpansionState::default();

        // Mixed starting state.
        state.toggle_open(&f, &ids[3]);
        state.toggle_open(&f, &ids[7]);

        state.set_all(&f, true);
        assert!(ids.iter().all(|id| state.is_open(id)));

        state.set_all(&f, false);
        assert!(ids.iter().all(|id| !state.is_open(id)));
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let f = deep_forest(3);
        let ids = tree::collect_ids(&f);
        let mut state = ExpansionState::default();

        assert!(state.toggle_open(&f, &ids[1]));
        assert!(!state.is_open(&ids[1]));
        assert!(state.is_open(&ids[0]));
        assert!(state.is_open(&ids[2]));

        assert!(state.toggle_open(&f, &ids[1]));
        assert!(state.is_open(&ids[1]));
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let f = deep_forest(2);
        let mut state = ExpansionState::default();
        let before = state.clone();
        assert!(!state.toggle_open(&f, &NodeId::new()));
        assert_eq!(state, before);
    }

    #[test]
    fn retain_drops_deleted_ids() {
        let f = deep_forest(3);
        let ids = tree::collect_ids(&f);
        let mut state = ExpansionState::default();
        state.set_all(&f, false);

        let (after, _) = tree::remove(&f, &ids[1]).unwrap();
        state.retain(&after);
        assert_eq!(state.collapsed.len(), 2);
    }
}
