use serde::{Deserialize, Serialize};

use crate::app::domain::CourseId;

/// A catalog course. Tasks copy code, name and version from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    pub version: String,
    pub category: String,
}
