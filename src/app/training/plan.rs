use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::app::domain::{CourseId, NodeId, PlanId, Priority};

/// First and last selectable plan years.
pub const PLAN_YEAR_START: i32 = 2026;
pub const PLAN_YEAR_END: i32 = 2036;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PlanLevel {
    Company,
    Department,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TrainingType {
    #[serde(rename = "SELF")]
    #[strum(serialize = "SELF")]
    SelfStudy,
    Online,
    Onsite,
    External,
    Guest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlanStatus {
    Planned,
    InProgress,
    Completed,
}

/// An annual training plan entry. Empty target sets mean "everyone on that axis".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: PlanId,
    pub title: String,
    pub code: String,
    pub year: i32,
    pub month: u8,
    pub level: PlanLevel,
    pub training_types: Vec<TrainingType>,
    pub target_description: String,
    pub owner: String,
    pub priority: Priority,
    pub target_company_ids: Vec<NodeId>,
    pub target_department_ids: Vec<NodeId>,
    pub target_position_ids: Vec<NodeId>,
    pub course_ids: Vec<CourseId>,
    /// Per-course progress 0..=100; absent entries count as 0.
    pub course_progress: BTreeMap<CourseId, u8>,
    pub progress: u8,
    pub status: PlanStatus,
    pub created_at: i64,
}

/// Fields supplied when creating a plan. Validated at the request boundary.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub title: String,
    pub code: String,
    pub year: i32,
    pub month: u8,
    pub level: PlanLevel,
    pub training_types: Vec<TrainingType>,
    pub target_description: String,
    pub owner: String,
    pub priority: Priority,
    pub target_company_ids: Vec<NodeId>,
    pub target_department_ids: Vec<NodeId>,
    pub target_position_ids: Vec<NodeId>,
    pub course_ids: Vec<CourseId>,
}

impl PlanItem {
    /// A new plan starts planned at 0%.
    pub fn create(new: NewPlan) -> Self {
        Self {
            id: PlanId::new(),
            title: new.title,
            code: new.code,
            year: new.year,
            month: new.month,
            level: new.level,
            training_types: new.training_types,
            target_description: new.target_description,
            owner: new.owner,
            priority: new.priority,
            target_company_ids: new.target_company_ids,
            target_department_ids: new.target_department_ids,
            target_position_ids: new.target_position_ids,
            course_ids: new.course_ids,
            course_progress: BTreeMap::new(),
            progress: 0,
            status: PlanStatus::Planned,
            created_at: time::OffsetDateTime::now_utc().unix_timestamp(),
        }
    }
}

/// Annual plan screen filter. Unset fields do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFilter {
    pub level: Option<PlanLevel>,
    pub company_id: Option<NodeId>,
    pub year: Option<i32>,
}

/// Plans matching every set field of `filter`, in their stored order.
/// A plan with no target companies applies to all companies and passes any company filter.
pub fn filter_plans<'a>(plans: &'a [PlanItem], filter: &PlanFilter) -> Vec<&'a PlanItem> {
    plans
        .iter()
        .filter(|p| filter.level.map_or(true, |level| p.level == level))
        .filter(|p| filter.year.map_or(true, |year| p.year == year))
        .filter(|p| {
            filter.company_id.as_ref().map_or(true, |company| {
                p.target_company_ids.is_empty() || p.target_company_ids.contains(company)
            })
        })
        .collect()
}
