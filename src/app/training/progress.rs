//! Per-course progress and its rollup into plan progress and status.

use std::collections::BTreeMap;

use super::plan::{PlanItem, PlanStatus};
use super::TrainingError;
use crate::app::domain::{CourseId, PlanId};

pub const MAX_PROGRESS: u8 = 100;

fn progress_sum(course_ids: &[CourseId], course_progress: &BTreeMap<CourseId, u8>) -> u32 {
    course_ids
        .iter()
        .map(|id| u32::from(course_progress.get(id).copied().unwrap_or(0)))
        .sum()
}

/// Rounded mean of the progress of every course in `course_ids` (missing entries count as 0).
/// An empty course list rolls up to 0. The result is for display; completion uses `status_for`.
pub fn rollup(course_ids: &[CourseId], course_progress: &BTreeMap<CourseId, u8>) -> u8 {
    if course_ids.is_empty() {
        return 0;
    }
    let n = course_ids.len() as u32;
    let sum = progress_sum(course_ids, course_progress);
    // Round half up.
    ((2 * sum + n) / (2 * n)) as u8
}

/// `Completed` only when the unrounded mean reaches 100, i.e. every course is finished.
pub fn status_for(course_ids: &[CourseId], course_progress: &BTreeMap<CourseId, u8>) -> PlanStatus {
    let n = course_ids.len() as u32;
    if n > 0 && progress_sum(course_ids, course_progress) >= u32::from(MAX_PROGRESS) * n {
        PlanStatus::Completed
    } else {
        PlanStatus::InProgress
    }
}

/// Advance `course_id` within `plan_id` by `step` (capped at 100) and recompute that plan's
/// overall progress and status. Other plans are returned unchanged.
pub fn record_learning(
    plans: &[PlanItem],
    plan_id: &PlanId,
    course_id: &CourseId,
    step: u8,
) -> Result<(Vec<PlanItem>, PlanItem), TrainingError> {
    let mut next = plans.to_vec();
    let plan = next
        .iter_mut()
        .find(|p| p.id == *plan_id)
        .ok_or_else(|| TrainingError::PlanNotFound(plan_id.clone()))?;

    if !plan.course_ids.contains(course_id) {
        return Err(TrainingError::CourseNotInPlan {
            plan_id: plan_id.clone(),
            course_id: course_id.clone(),
        });
    }

    let current = plan.course_progress.get(course_id).copied().unwrap_or(0);
    let advanced = current.saturating_add(step).min(MAX_PROGRESS);
    plan.course_progress.insert(course_id.clone(), advanced);

    plan.progress = rollup(&plan.course_ids, &plan.course_progress);
    plan.status = status_for(&plan.course_ids, &plan.course_progress);

    tracing::info!(
        plan_id = %plan.id,
        course_id = %course_id,
        course_progress = advanced,
        plan_progress = plan.progress,
        status = %plan.status,
        "learning progress recorded"
    );

    let updated = plan.clone();
    Ok((next, updated))
}
