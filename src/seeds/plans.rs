use crate::app::domain::{CourseId, Priority};
use crate::app::training::{progress, NewPlan, PlanItem, PlanLevel, TrainingType, UserProfile};
use crate::app::workspace::Workspace;
use crate::seeds::{org_unit, Seed, SeedError, SeedOutcome};

fn course(workspace: &Workspace, code: &str) -> Result<CourseId, SeedError> {
    workspace
        .training
        .courses
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.id.clone())
        .ok_or_else(|| SeedError::MissingReference(format!("course {}", code)))
}

/// Seeded plans carry some learning history; progress and status are derived from it.
fn with_progress(mut plan: PlanItem, progress_by_course: &[(CourseId, u8)]) -> PlanItem {
    for (course_id, value) in progress_by_course {
        plan.course_progress.insert(course_id.clone(), *value);
    }
    plan.progress = progress::rollup(&plan.course_ids, &plan.course_progress);
    if !plan.course_progress.is_empty() {
        plan.status = progress::status_for(&plan.course_ids, &plan.course_progress);
    }
    plan
}

/// A group-wide GMP plan and a data-integrity plan for QA/QC leads.
pub struct AnnualPlans;

impl Seed for AnnualPlans {
    fn version(&self) -> i64 {
        20260101000500
    }

    fn description(&self) -> &str {
        "annual_plans"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        if !workspace.training.plans.is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let gmp = course(workspace, "GMP-001")?;
        let ehs = course(workspace, "EHS-003")?;
        let data_integrity = course(workspace, "DI-101")?;
        let capa = course(workspace, "SOP-QA-012")?;

        let group_plan = PlanItem::create(NewPlan {
            title: "2026 GMP Regulations Group-wide Rollout".to_string(),
            code: "TR-GRP-001".to_string(),
            year: 2026,
            month: 1,
            level: PlanLevel::Company,
            training_types: vec![TrainingType::Online, TrainingType::SelfStudy],
            target_description: "All employees across the group".to_string(),
            owner: "Group QA Director".to_string(),
            priority: Priority::High,
            target_company_ids: vec![org_unit(workspace, "01")?, org_unit(workspace, "02")?, org_unit(workspace, "03")?],
            target_department_ids: vec![],
            target_position_ids: vec![],
            course_ids: vec![gmp.clone(), ehs.clone()],
        });
        let group_plan = with_progress(group_plan, &[(gmp, 100), (ehs, 100)]);

        let integrity_plan = PlanItem::create(NewPlan {
            title: "Data Integrity (ALCOA+) Advanced Workshop".to_string(),
            code: "TR-C1-002".to_string(),
            year: 2026,
            month: 6,
            level: PlanLevel::Department,
            training_types: vec![TrainingType::Onsite, TrainingType::Guest],
            target_description: "QA/QC core management positions".to_string(),
            owner: "Compliance Manager".to_string(),
            priority: Priority::High,
            target_company_ids: vec![org_unit(workspace, "01")?],
            target_department_ids: vec![org_unit(workspace, "0101")?, org_unit(workspace, "0102")?],
            target_position_ids: vec![org_unit(workspace, "010101")?, org_unit(workspace, "010202")?],
            course_ids: vec![data_integrity.clone(), capa],
        });
        let integrity_plan = with_progress(integrity_plan, &[(data_integrity, 90)]);

        workspace.training.plans = vec![group_plan, integrity_plan];
        Ok(SeedOutcome::Applied)
    }
}

/// The mock signed-in user: a QA manager at G-Pharma.
pub struct CurrentUser;

impl Seed for CurrentUser {
    fn version(&self) -> i64 {
        20260101000600
    }

    fn description(&self) -> &str {
        "current_user"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        if !workspace.training.current_user.name.is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        workspace.training.current_user = UserProfile {
            name: "Alex Johnson".to_string(),
            employee_id: "EMP-9401".to_string(),
            title: "QA Manager".to_string(),
            company_id: Some(org_unit(workspace, "01")?),
            department_id: Some(org_unit(workspace, "0101")?),
            position_id: Some(org_unit(workspace, "010101")?),
        };
        Ok(SeedOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::training::PlanStatus;

    #[test]
    fn seeded_plans_roll_up_their_history() {
        let mut workspace = Workspace::empty();
        crate::seeds::run_seeds(&mut workspace).unwrap();

        let plans = &workspace.training.plans;
        assert_eq!(plans[0].progress, 100);
        assert_eq!(plans[0].status, PlanStatus::Completed);
        assert_eq!(plans[1].progress, 45);
        assert_eq!(plans[1].status, PlanStatus::InProgress);
    }

    #[test]
    fn plans_need_the_catalog() {
        let mut workspace = Workspace::empty();
        let err = AnnualPlans.run(&mut workspace).unwrap_err();
        assert!(matches!(err, SeedError::MissingReference(_)));
    }
}
