//! Hierarchy forests: node model, copy-on-write tree transforms, code generation and the
//! per-domain store shared by the generic hierarchy manager and organization settings.

pub mod confirm;
pub mod expansion;
pub mod node;
pub mod org_settings;
pub mod store;
pub mod tree;

pub use confirm::{deletion_warning, Confirm};
pub use expansion::ExpansionState;
pub use node::{Forest, HierarchyNode, NewNode, NodeAttributes};
pub use store::{DeleteOutcome, HierarchyStore, TreeView};

use crate::app::domain::NodeId;

/// Errors raised by hierarchy mutations. A failed mutation never changes the forest.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Level is full: no free code left under prefix '{prefix}'")]
    LevelFull { prefix: String },
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("{0}")]
    WrongLevel(String),
    #[error("Malformed code '{code}' under prefix '{prefix}'")]
    MalformedCode { code: String, prefix: String },
    #[error("Duplicate sibling code '{0}'")]
    DuplicateCode(String),
}
