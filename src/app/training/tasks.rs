//! Expands annual plans into the per-course tasks a user works through.

use serde::Serialize;
use strum_macros::Display;

use super::course::Course;
use super::plan::PlanItem;
use super::user::UserProfile;
use crate::app::domain::{CourseId, NodeId, PlanId, Priority};

/// Day of month used for every synthesized due date; valid in every month.
pub const DUE_DAY: u8 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Pending,
}

/// One (plan, course) pair as seen by the user. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub plan_id: PlanId,
    pub course_id: CourseId,
    pub code: String,
    pub title: String,
    pub version: String,
    pub progress: u8,
    pub status: TaskStatus,
    pub due_date: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    /// High-priority tasks not yet completed.
    pub urgent: usize,
    pub completion_percent: u8,
}

/// Empty target set, or the user's coordinate on that axis is one of the targets.
fn axis_matches(targets: &[NodeId], coordinate: Option<&NodeId>) -> bool {
    targets.is_empty() || coordinate.is_some_and(|id| targets.contains(id))
}

/// A plan applies to a user when company, department and position each match.
pub fn plan_matches(plan: &PlanItem, user: &UserProfile) -> bool {
    axis_matches(&plan.target_company_ids, user.company_id.as_ref())
        && axis_matches(&plan.target_department_ids, user.department_id.as_ref())
        && axis_matches(&plan.target_position_ids, user.position_id.as_ref())
}

pub fn due_date(year: i32, month: u8) -> String {
    format!("{}-{:02}-{:02}", year, month, DUE_DAY)
}

/// Flatten every matching plan into one task per catalog course, in plan then course order.
/// Courses missing from the catalog are skipped. The same course in two plans yields two tasks.
pub fn decompose(plans: &[PlanItem], courses: &[Course], user: &UserProfile) -> Vec<Task> {
    let mut tasks = Vec::new();

    for plan in plans.iter().filter(|plan| plan_matches(plan, user)) {
        for course_id in &plan.course_ids {
            let Some(course) = courses.iter().find(|c| c.id == *course_id) else {
                tracing::debug!(plan_id = %plan.id, course_id = %course_id, "plan references unknown course; skipped");
                continue;
            };

            let progress = plan.course_progress.get(course_id).copied().unwrap_or(0);
            tasks.push(Task {
                id: format!("{}-{}", plan.id, course.id),
                plan_id: plan.id.clone(),
                course_id: course.id.clone(),
                code: course.code.clone(),
                title: course.name.clone(),
                version: course.version.clone(),
                progress,
                status: if progress >= 100 {
                    TaskStatus::Completed
                } else {
                    TaskStatus::Pending
                },
                due_date: due_date(plan.year, plan.month),
                priority: plan.priority,
            });
        }
    }

    tasks
}

pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
    let urgent = tasks
        .iter()
        .filter(|t| t.priority == Priority::High && t.status != TaskStatus::Completed)
        .count();
    let denominator = total.max(1);
    let completion_percent = ((completed * 200 + denominator) / (denominator * 2)) as u8;

    TaskSummary {
        total,
        completed,
        urgent,
        completion_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::training::plan::{tests::new_plan, PlanItem};

    struct Org {
        company: NodeId,
        qa: NodeId,
        qc: NodeId,
        manager: NodeId,
        analyst: NodeId,
    }

    fn org() -> Org {
        Org {
            company: NodeId::new(),
            qa: NodeId::new(),
            qc: NodeId::new(),
            manager: NodeId::new(),
            analyst: NodeId::new(),
        }
    }

    fn user(org: &Org, department: &NodeId, position: &NodeId) -> UserProfile {
        UserProfile {
            name: "Alex Johnson".into(),
            employee_id: "EMP-9401".into(),
            title: "Training lead".into(),
            company_id: Some(org.company.clone()),
            department_id: Some(department.clone()),
            position_id: Some(position.clone()),
        }
    }

    fn course(code: &str) -> Course {
        Course {
            id: CourseId::new(),
            code: code.into(),
            name: format!("{code} course"),
            version: "v1.0".into(),
            category: "GMP".into(),
        }
    }

    #[test]
    fn wildcard_department_with_position_target() {
        let org = org();
        let mut plan = PlanItem::create(new_plan("positions"));
        plan.target_department_ids = vec![];
        plan.target_position_ids = vec![org.manager.clone()];

        // Matches regardless of department.
        assert!(plan_matches(&plan, &user(&org, &org.qa, &org.manager)));
        assert!(plan_matches(&plan, &user(&org, &org.qc, &org.manager)));
        // Never matches with another position.
        assert!(!plan_matches(&plan, &user(&org, &org.qa, &org.analyst)));
        assert!(!plan_matches(&plan, &user(&org, &org.qc, &org.analyst)));
    }

    #[test]
    fn or_within_axis_and_across_axes() {
        let org = org();
        let mut plan = PlanItem::create(new_plan("qa or qc managers"));
        plan.target_company_ids = vec![org.company.clone()];
        plan.target_department_ids = vec![org.qa.clone(), org.qc.clone()];
        plan.target_position_ids = vec![org.manager.clone()];

        assert!(plan_matches(&plan, &user(&org, &org.qc, &org.manager)));
        assert!(!plan_matches(&plan, &user(&org, &org.qc, &org.analyst)));

        let mut elsewhere = user(&org, &org.qa, &org.manager);
        elsewhere.company_id = Some(NodeId::new());
        assert!(!plan_matches(&plan, &elsewhere));
    }

    #[test]
    fn unassigned_user_only_matches_wildcards() {
        let org = org();
        let nobody = UserProfile::default();
        let open = PlanItem::create(new_plan("open"));
        let mut targeted = PlanItem::create(new_plan("targeted"));
        targeted.target_company_ids = vec![org.company.clone()];

        assert!(plan_matches(&open, &nobody));
        assert!(!plan_matches(&targeted, &nobody));
    }

    #[test]
    fn decompose_emits_one_task_per_known_course() {
        let org = org();
        let c1 = course("SOP-QA-01");
        let c2 = course("GMP-PRO-02");
        let missing = CourseId::new();

        let mut plan = PlanItem::create(new_plan("annual"));
        plan.year = 2026;
        plan.month = 3;
        plan.priority = Priority::High;
        plan.course_ids = vec![c1.id.clone(), missing, c2.id.clone()];
        plan.course_progress.insert(c2.id.clone(), 100);

        let tasks = decompose(&[plan.clone()], &[c1.clone(), c2.clone()], &user(&org, &org.qa, &org.manager));
        assert_eq!(tasks.len(), 2);

        assert_eq!(tasks[0].id, format!("{}-{}", plan.id, c1.id));
        assert_eq!(tasks[0].code, "SOP-QA-01");
        assert_eq!(tasks[0].title, "SOP-QA-01 course");
        assert_eq!(tasks[0].version, "v1.0");
        assert_eq!(tasks[0].progress, 0);
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[0].due_date, "2026-03-28");
        assert_eq!(tasks[0].priority, Priority::High);

        assert_eq!(tasks[1].course_id, c2.id);
        assert_eq!(tasks[1].status, TaskStatus::Completed);
    }

    #[test]
    fn same_course_in_two_plans_is_not_deduplicated() {
        let org = org();
        let c1 = course("GMP-01");

        let mut first = PlanItem::create(new_plan("first"));
        first.course_ids = vec![c1.id.clone()];
        first.course_progress.insert(c1.id.clone(), 30);
        let mut second = PlanItem::create(new_plan("second"));
        second.course_ids = vec![c1.id.clone()];

        let tasks = decompose(&[first, second], &[c1], &user(&org, &org.qa, &org.manager));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].progress, 30);
        assert_eq!(tasks[1].progress, 0);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn unmatched_plans_yield_no_tasks() {
        let org = org();
        let c1 = course("GMP-01");
        let mut plan = PlanItem::create(new_plan("qc only"));
        plan.target_department_ids = vec![org.qc.clone()];
        plan.course_ids = vec![c1.id.clone()];

        assert!(decompose(&[plan], &[c1], &user(&org, &org.qa, &org.manager)).is_empty());
    }

    #[test]
    fn due_date_pads_month() {
        assert_eq!(due_date(2027, 11), "2027-11-28");
        assert_eq!(due_date(2026, 2), "2026-02-28");
    }

    #[test]
    fn summary_counts_urgent_and_rounds_percent() {
        let org = org();
        let courses = vec![course("A"), course("B"), course("C")];
        let mut plan = PlanItem::create(new_plan("mixed"));
        plan.priority = Priority::High;
        plan.course_ids = courses.iter().map(|c| c.id.clone()).collect();
        plan.course_progress.insert(courses[0].id.clone(), 100);

        let tasks = decompose(&[plan], &courses, &user(&org, &org.qa, &org.manager));
        let summary = summarize(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.urgent, 2);
        assert_eq!(summary.completion_percent, 33);

        let empty = summarize(&[]);
        assert_eq!(empty.completion_percent, 0);
    }
}
