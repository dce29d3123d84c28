//! Confirmation gate for destructive operations. Declining is a normal cancellation, not an error.

use super::node::HierarchyNode;
use crate::app::domain::HierarchyDomain;

/// Blocks until a human decides. `true` proceeds, `false` cancels with no state change.
pub trait Confirm {
    fn confirm(&self, warning: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, warning: &str) -> bool {
        self(warning)
    }
}

/// Human-readable warning naming the node about to be removed.
pub fn deletion_warning(domain: HierarchyDomain, node: &HierarchyNode) -> String {
    let descendants = node.subtree_len() - 1;
    match domain {
        HierarchyDomain::Organization => format!(
            "Warning: deleting [{}] also removes it from organization settings; training plans and users assigned to it will no longer match. {} descendant unit(s) will be removed. Continue?",
            node.name, descendants
        ),
        _ => format!(
            "Delete node [{}] {} and all of its {} descendant node(s)?",
            node.code, node.name, descendants
        ),
    }
}
