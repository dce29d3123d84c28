use std::borrow::Cow;

use validator::ValidationError;

use crate::app::{domain::NodeId, error::AppError};

/// Rejects names that are only whitespace (length is checked separately).
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("name").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Parse a node id from a path or body. Malformed ids cannot exist, so they are reported as missing.
pub fn parse_node_id(raw: &str) -> Result<NodeId, AppError> {
    NodeId::from_string(raw).map_err(|_| AppError::NotFound("Node not found".to_string()))
}
