//! Copy-on-write forest transforms. Every mutation clones the forest, edits the clone and
//! returns it; on error the caller's forest is left as it was.

use std::collections::HashSet;

use super::node::{Forest, HierarchyNode, NewNode};
use super::HierarchyError;
use crate::app::domain::{node_code::next_sibling_code, NodeId};

/// Where a node sits in its forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLocation {
    /// 0 for roots.
    pub depth: usize,
    pub parent_id: Option<NodeId>,
}

/// Depth-first search for the first node with `id`.
pub fn find_node<'a>(forest: &'a [HierarchyNode], id: &NodeId) -> Option<&'a HierarchyNode> {
    for node in forest {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Depth-first search by code.
pub fn find_by_code<'a>(forest: &'a [HierarchyNode], code: &str) -> Option<&'a HierarchyNode> {
    for node in forest {
        if node.code.as_str() == code {
            return Some(node);
        }
        if let Some(found) = find_by_code(&node.children, code) {
            return Some(found);
        }
    }
    None
}

pub fn locate(forest: &[HierarchyNode], id: &NodeId) -> Option<NodeLocation> {
    fn walk(nodes: &[HierarchyNode], id: &NodeId, depth: usize, parent: Option<&NodeId>) -> Option<NodeLocation> {
        for node in nodes {
            if node.id == *id {
                return Some(NodeLocation {
                    depth,
                    parent_id: parent.cloned(),
                });
            }
            if let Some(found) = walk(&node.children, id, depth + 1, Some(&node.id)) {
                return Some(found);
            }
        }
        None
    }
    walk(forest, id, 0, None)
}

/// Every node id in the forest, parents before children.
pub fn collect_ids(forest: &[HierarchyNode]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut stack: Vec<&HierarchyNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        ids.push(node.id.clone());
        stack.extend(node.children.iter().rev());
    }
    ids
}

fn find_node_mut<'a>(nodes: &'a mut [HierarchyNode], id: &NodeId) -> Option<&'a mut HierarchyNode> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// The sibling list that directly contains `id`.
fn sibling_list_mut<'a>(nodes: &'a mut Vec<HierarchyNode>, id: &NodeId) -> Option<&'a mut Vec<HierarchyNode>> {
    if nodes.iter().any(|n| n.id == *id) {
        return Some(nodes);
    }
    for node in nodes.iter_mut() {
        if let Some(list) = sibling_list_mut(&mut node.children, id) {
            return Some(list);
        }
    }
    None
}

fn remove_from(nodes: &mut Vec<HierarchyNode>, id: &NodeId) -> Option<HierarchyNode> {
    if let Some(pos) = nodes.iter().position(|n| n.id == *id) {
        return Some(nodes.remove(pos));
    }
    nodes.iter_mut().find_map(|n| remove_from(&mut n.children, id))
}

/// Append a node to the sibling list containing `after`, or as a new root when `after` is `None`.
/// Returns the new forest and the created node.
pub fn add_sibling(
    forest: &[HierarchyNode],
    after: Option<&NodeId>,
    new: NewNode,
) -> Result<(Forest, HierarchyNode), HierarchyError> {
    let mut next = forest.to_vec();

    let (siblings, prefix) = match after {
        None => (&mut next, String::new()),
        Some(after_id) => {
            let list = sibling_list_mut(&mut next, after_id)
                .ok_or_else(|| HierarchyError::NodeNotFound(after_id.clone()))?;
            let prefix = list
                .iter()
                .find(|n| n.id == *after_id)
                .map(|n| n.code.parent_prefix().to_string())
                .unwrap_or_default();
            (list, prefix)
        }
    };

    let code = next_sibling_code(&prefix, siblings.iter().map(|n| &n.code))
        .ok_or_else(|| HierarchyError::LevelFull { prefix: prefix.clone() })?;
    let node = HierarchyNode::leaf(code, new);
    siblings.push(node.clone());

    Ok((next, node))
}

/// Append a node as the last child of `parent_id`.
pub fn add_child(
    forest: &[HierarchyNode],
    parent_id: &NodeId,
    new: NewNode,
) -> Result<(Forest, HierarchyNode), HierarchyError> {
    let mut next = forest.to_vec();

    let parent = find_node_mut(&mut next, parent_id)
        .ok_or_else(|| HierarchyError::NodeNotFound(parent_id.clone()))?;
    let code = next_sibling_code(parent.code.as_str(), parent.children.iter().map(|n| &n.code))
        .ok_or_else(|| HierarchyError::LevelFull {
            prefix: parent.code.to_string(),
        })?;
    let node = HierarchyNode::leaf(code, new);
    parent.children.push(node.clone());

    Ok((next, node))
}

/// Rename a node. Code, attributes and children are untouched.
pub fn rename(forest: &[HierarchyNode], id: &NodeId, name: &str) -> Result<Forest, HierarchyError> {
    let mut next = forest.to_vec();
    let node = find_node_mut(&mut next, id).ok_or_else(|| HierarchyError::NodeNotFound(id.clone()))?;
    node.name = name.to_string();
    Ok(next)
}

/// Remove a node and its whole subtree. Returns the new forest and the removed subtree.
pub fn remove(forest: &[HierarchyNode], id: &NodeId) -> Result<(Forest, HierarchyNode), HierarchyError> {
    let mut next = forest.to_vec();
    let removed = remove_from(&mut next, id).ok_or_else(|| HierarchyError::NodeNotFound(id.clone()))?;
    Ok((next, removed))
}

/// Check that every code is its parent's code plus two digits and that sibling codes are unique.
/// Used on seeded data, which the generator never touched.
pub fn validate_forest(forest: &[HierarchyNode]) -> Result<(), HierarchyError> {
    fn validate_level(nodes: &[HierarchyNode], prefix: &str) -> Result<(), HierarchyError> {
        let mut seen = HashSet::new();
        for node in nodes {
            if !node.code.is_well_formed_under(prefix) {
                return Err(HierarchyError::MalformedCode {
                    code: node.code.to_string(),
                    prefix: prefix.to_string(),
                });
            }
            if !seen.insert(node.code.as_str()) {
                return Err(HierarchyError::DuplicateCode(node.code.to_string()));
            }
            validate_level(&node.children, node.code.as_str())?;
        }
        Ok(())
    }
    validate_level(forest, "")
}
