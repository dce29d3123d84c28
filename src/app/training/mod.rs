//! Annual plans, the course catalog and the per-user task view derived from them.

pub mod course;
pub mod plan;
pub mod progress;
pub mod tasks;
pub mod user;

pub use course::Course;
pub use plan::{filter_plans, NewPlan, PlanFilter, PlanItem, PlanLevel, PlanStatus, TrainingType};
pub use progress::{record_learning, rollup};
pub use tasks::{decompose, plan_matches, summarize, Task, TaskStatus, TaskSummary};
pub use user::UserProfile;

use crate::app::domain::{CourseId, PlanId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("Plan not found: {0}")]
    PlanNotFound(PlanId),
    #[error("Course {course_id} is not part of plan {plan_id}")]
    CourseNotInPlan { plan_id: PlanId, course_id: CourseId },
}

/// Everything the training hub and the annual plan screen read and write.
#[derive(Debug, Clone)]
pub struct TrainingBook {
    pub courses: Vec<Course>,
    pub plans: Vec<PlanItem>,
    pub current_user: UserProfile,
}

impl TrainingBook {
    pub fn new(current_user: UserProfile) -> Self {
        Self {
            courses: Vec::new(),
            plans: Vec::new(),
            current_user,
        }
    }

    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == *id)
    }

    pub fn plan(&self, id: &PlanId) -> Option<&PlanItem> {
        self.plans.iter().find(|p| p.id == *id)
    }

    /// Tasks for the current user, recomputed on every call.
    pub fn current_tasks(&self) -> Vec<Task> {
        decompose(&self.plans, &self.courses, &self.current_user)
    }

    /// Advance one course of one plan by `step` and roll the plan's progress up.
    pub fn record_learning(
        &mut self,
        plan_id: &PlanId,
        course_id: &CourseId,
        step: u8,
    ) -> Result<PlanItem, TrainingError> {
        let (plans, updated) = record_learning(&self.plans, plan_id, course_id, step)?;
        self.plans = plans;
        Ok(updated)
    }
}
