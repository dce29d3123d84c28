use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Regulatory risk of a position. Only meaningful on leaf position nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}
