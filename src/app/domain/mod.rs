pub mod course_id;
pub mod hierarchy_domain;
pub mod node_code;
pub mod node_id;
pub mod plan_id;
pub mod priority;
pub mod risk_level;
pub mod role;
pub mod user_id;

pub use course_id::CourseId;
pub use hierarchy_domain::HierarchyDomain;
pub use node_code::NodeCode;
pub use node_id::NodeId;
pub use plan_id::PlanId;
pub use priority::Priority;
pub use risk_level::RiskLevel;
pub use role::Role;
pub use user_id::UserId;
