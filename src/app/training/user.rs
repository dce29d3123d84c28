use serde::{Deserialize, Serialize};

use crate::app::domain::NodeId;

/// The signed-in (mock) user and their place in the organization forest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub employee_id: String,
    pub title: String,
    pub company_id: Option<NodeId>,
    pub department_id: Option<NodeId>,
    pub position_id: Option<NodeId>,
}
