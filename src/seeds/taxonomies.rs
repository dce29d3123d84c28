use crate::app::domain::HierarchyDomain;
use crate::app::hierarchy::NodeAttributes;
use crate::app::workspace::Workspace;
use crate::seeds::{leaf, node, Seed, SeedError, SeedOutcome};

/// Course categories used by the catalog.
pub struct CourseTaxonomy;

impl Seed for CourseTaxonomy {
    fn version(&self) -> i64 {
        20260101000200
    }

    fn description(&self) -> &str {
        "course_taxonomy"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        let domain = HierarchyDomain::Course;
        if !workspace.hierarchy.forest(domain).is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let forest = vec![
            node(
                "01",
                "GMP Basics",
                NodeAttributes::default(),
                vec![leaf("0101", "Regulations"), leaf("0102", "Good Documentation Practice")],
            ),
            leaf("02", "Production SOP"),
            leaf("03", "Quality Control (QC)"),
            leaf("04", "QA Compliance"),
            leaf("05", "EHS Safety"),
            leaf("06", "Materials Management"),
        ];
        workspace.hierarchy.seed_forest(domain, forest)?;
        Ok(SeedOutcome::Applied)
    }
}

/// Learner groups.
pub struct StudentCategories;

impl Seed for StudentCategories {
    fn version(&self) -> i64 {
        20260101000300
    }

    fn description(&self) -> &str {
        "student_categories"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        let domain = HierarchyDomain::Student;
        if !workspace.hierarchy.forest(domain).is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let forest = vec![
            node(
                "01",
                "Employees",
                NodeAttributes::default(),
                vec![leaf("0101", "Full-time"), leaf("0102", "Contractors")],
            ),
            leaf("02", "New Hires"),
            leaf("03", "External Auditors"),
        ];
        workspace.hierarchy.seed_forest(domain, forest)?;
        Ok(SeedOutcome::Applied)
    }
}
