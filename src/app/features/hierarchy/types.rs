use serde::{Deserialize, Serialize};

use crate::app::{
    domain::{HierarchyDomain, NodeCode, NodeId},
    hierarchy::{ExpansionState, HierarchyNode, HierarchyStore, NodeAttributes},
};

/// Path parameters for domain-wide endpoints.
#[derive(Debug, Deserialize)]
pub struct DomainPathParams {
    pub domain: HierarchyDomain,
}

/// Path parameters for node endpoints with ID.
#[derive(Debug, Deserialize)]
pub struct NodePathParams {
    pub domain: HierarchyDomain,
    pub id: String,
}

/// `?confirm=true` acknowledges the deletion warning. Missing means not confirmed.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// A node with its expansion flag merged in.
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub id: NodeId,
    pub code: NodeCode,
    pub name: String,
    #[serde(flatten)]
    pub attributes: NodeAttributes,
    pub is_open: bool,
    pub children: Vec<NodeResponse>,
}

impl NodeResponse {
    pub fn from_node(node: &HierarchyNode, expansion: &ExpansionState) -> Self {
        Self {
            id: node.id.clone(),
            code: node.code.clone(),
            name: node.name.clone(),
            attributes: node.attributes.clone(),
            is_open: expansion.is_open(&node.id),
            children: node
                .children
                .iter()
                .map(|child| NodeResponse::from_node(child, expansion))
                .collect(),
        }
    }
}

/// A whole domain forest as the tree view renders it.
#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub domain: HierarchyDomain,
    pub selected_id: Option<NodeId>,
    pub nodes: Vec<NodeResponse>,
}

impl TreeResponse {
    pub fn from_store(store: &HierarchyStore, domain: HierarchyDomain) -> Self {
        let view = store.view(domain);
        Self {
            domain,
            selected_id: view.selected.clone(),
            nodes: store
                .forest(domain)
                .iter()
                .map(|node| NodeResponse::from_node(node, &view.expansion))
                .collect(),
        }
    }
}
