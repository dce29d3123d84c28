use serde::{Deserialize, Serialize};

use crate::app::domain::{NodeCode, NodeId, RiskLevel};

/// A domain forest: ordered root nodes.
pub type Forest = Vec<HierarchyNode>;

/// Optional domain-specific attributes carried as opaque metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub is_gxp: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

/// One node of a hierarchy forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: NodeId,
    pub code: NodeCode,
    pub name: String,
    #[serde(flatten)]
    pub attributes: NodeAttributes,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

/// Input for creating a node. The id and code are assigned by the tree engine.
#[derive(Debug, Clone, Default)]
pub struct NewNode {
    pub name: String,
    pub attributes: NodeAttributes,
}

impl NewNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: NodeAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: NodeAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl HierarchyNode {
    /// Build a fresh leaf with a newly generated id.
    pub(crate) fn leaf(code: NodeCode, new: NewNode) -> Self {
        Self {
            id: NodeId::new(),
            code,
            name: new.name,
            attributes: new.attributes,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::subtree_len).sum::<usize>()
    }
}
