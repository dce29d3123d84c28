use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Plan priority, inherited by every task the plan expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}
