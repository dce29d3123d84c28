//! The single owner of every domain forest plus each domain's presentation state.
//! Both the generic hierarchy manager and organization settings go through this store.

use super::confirm::{deletion_warning, Confirm};
use super::expansion::ExpansionState;
use super::node::{Forest, HierarchyNode, NewNode};
use super::{tree, HierarchyError};
use crate::app::domain::{HierarchyDomain, NodeId};

/// Presentation state for one domain's tree: which nodes are open and which one is selected.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    pub selected: Option<NodeId>,
    pub expansion: ExpansionState,
}

/// Result of a confirmed-or-declined delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The removed subtree.
    Deleted(HierarchyNode),
    /// Nothing changed.
    Declined { warning: String },
}

#[derive(Debug, Clone, Default)]
struct DomainState {
    forest: Forest,
    view: TreeView,
}

#[derive(Debug, Clone, Default)]
pub struct HierarchyStore {
    organization: DomainState,
    course: DomainState,
    student: DomainState,
}

impl HierarchyStore {
    /// Empty forests for every domain.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, domain: HierarchyDomain) -> &DomainState {
        match domain {
            HierarchyDomain::Organization => &self.organization,
            HierarchyDomain::Course => &self.course,
            HierarchyDomain::Student => &self.student,
        }
    }

    fn state_mut(&mut self, domain: HierarchyDomain) -> &mut DomainState {
        match domain {
            HierarchyDomain::Organization => &mut self.organization,
            HierarchyDomain::Course => &mut self.course,
            HierarchyDomain::Student => &mut self.student,
        }
    }

    pub fn forest(&self, domain: HierarchyDomain) -> &[HierarchyNode] {
        &self.state(domain).forest
    }

    pub fn view(&self, domain: HierarchyDomain) -> &TreeView {
        &self.state(domain).view
    }

    pub fn find(&self, domain: HierarchyDomain, id: &NodeId) -> Option<&HierarchyNode> {
        tree::find_node(self.forest(domain), id)
    }

    /// Replace a domain's forest wholesale.
    fn replace(&mut self, domain: HierarchyDomain, forest: Forest) {
        self.state_mut(domain).forest = forest;
    }

    /// Install externally built data after checking its codes.
    pub fn seed_forest(&mut self, domain: HierarchyDomain, forest: Forest) -> Result<(), HierarchyError> {
        tree::validate_forest(&forest)?;
        let state = self.state_mut(domain);
        state.forest = forest;
        state.view.expansion.retain(&state.forest);
        Ok(())
    }

    /// Append after `after` (or as a new root when `None`).
    pub fn add_sibling(
        &mut self,
        domain: HierarchyDomain,
        after: Option<&NodeId>,
        new: NewNode,
    ) -> Result<HierarchyNode, HierarchyError> {
        let (forest, node) = tree::add_sibling(self.forest(domain), after, new)?;
        self.replace(domain, forest);
        tracing::info!(%domain, node_id = %node.id, code = %node.code, name = %node.name, "hierarchy node added");
        Ok(node)
    }

    /// Append as the last child of `parent` and open the parent so the child is visible.
    pub fn add_child(
        &mut self,
        domain: HierarchyDomain,
        parent: &NodeId,
        new: NewNode,
    ) -> Result<HierarchyNode, HierarchyError> {
        let (forest, node) = tree::add_child(self.forest(domain), parent, new)?;
        self.replace(domain, forest);
        self.state_mut(domain).view.expansion.expand(parent);
        tracing::info!(%domain, parent_id = %parent, node_id = %node.id, code = %node.code, "hierarchy child added");
        Ok(node)
    }

    pub fn rename(
        &mut self,
        domain: HierarchyDomain,
        id: &NodeId,
        name: &str,
    ) -> Result<HierarchyNode, HierarchyError> {
        let forest = tree::rename(self.forest(domain), id, name)?;
        self.replace(domain, forest);
        tracing::info!(%domain, node_id = %id, name, "hierarchy node renamed");
        self.find(domain, id)
            .cloned()
            .ok_or_else(|| HierarchyError::NodeNotFound(id.clone()))
    }

    /// Delete a node and its subtree once `confirm` agrees to the warning.
    pub fn delete(
        &mut self,
        domain: HierarchyDomain,
        id: &NodeId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, HierarchyError> {
        let node = self
            .find(domain, id)
            .ok_or_else(|| HierarchyError::NodeNotFound(id.clone()))?;
        let warning = deletion_warning(domain, node);

        if !confirm.confirm(&warning) {
            tracing::info!(%domain, node_id = %id, "hierarchy delete declined");
            return Ok(DeleteOutcome::Declined { warning });
        }

        let (forest, removed) = tree::remove(self.forest(domain), id)?;
        let state = self.state_mut(domain);
        state.forest = forest;
        state.view.expansion.retain(&state.forest);
        if state
            .view
            .selected
            .as_ref()
            .is_some_and(|selected| tree::find_node(&state.forest, selected).is_none())
        {
            state.view.selected = None;
        }

        tracing::info!(%domain, node_id = %id, code = %removed.code, removed = removed.subtree_len(), "hierarchy subtree deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Flip one node's expansion. Unknown ids are ignored.
    pub fn toggle_open(&mut self, domain: HierarchyDomain, id: &NodeId) -> bool {
        let state = self.state_mut(domain);
        let toggled = state.view.expansion.toggle_open(&state.forest, id);
        if !toggled {
            tracing::debug!(%domain, node_id = %id, "toggle ignored: node not found");
        }
        toggled
    }

    pub fn toggle_all(&mut self, domain: HierarchyDomain, open: bool) {
        let state = self.state_mut(domain);
        state.view.expansion.set_all(&state.forest, open);
    }

    /// Track the single selected node (or clear it with `None`).
    pub fn select(&mut self, domain: HierarchyDomain, id: Option<NodeId>) -> Result<(), HierarchyError> {
        if let Some(id) = &id {
            if self.find(domain, id).is_none() {
                return Err(HierarchyError::NodeNotFound(id.clone()));
            }
        }
        self.state_mut(domain).view.selected = id;
        Ok(())
    }

    /// Delete whatever is selected. Nothing selected, or a selection that no longer exists,
    /// is a silent no-op returning `None`.
    pub fn delete_selected(
        &mut self,
        domain: HierarchyDomain,
        confirm: &dyn Confirm,
    ) -> Result<Option<DeleteOutcome>, HierarchyError> {
        let Some(selected) = self.view(domain).selected.clone() else {
            tracing::debug!(%domain, "delete selected ignored: nothing selected");
            return Ok(None);
        };
        if self.find(domain, &selected).is_none() {
            tracing::debug!(%domain, node_id = %selected, "delete selected ignored: node not found");
            return Ok(None);
        }

        let outcome = self.delete(domain, &selected, confirm)?;
        if matches!(outcome, DeleteOutcome::Deleted(_)) {
            self.state_mut(domain).view.selected = None;
        }
        Ok(Some(outcome))
    }
}
