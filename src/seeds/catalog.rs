use crate::app::domain::CourseId;
use crate::app::question_bank::csv;
use crate::app::training::Course;
use crate::app::workspace::Workspace;
use crate::seeds::{Seed, SeedError, SeedOutcome};

/// (code, name, version, category)
const COURSES: &[(&str, &str, &str, &str)] = &[
    ("GMP-001", "GMP Fundamentals", "v2.1", "GMP Basics"),
    ("EHS-003", "EHS Safety Induction", "v1.4", "EHS Safety"),
    ("DI-101", "Data Integrity (ALCOA+)", "v1.0", "Quality Control (QC)"),
    ("SOP-QA-012", "Deviation and CAPA Management", "v1.3", "QA Compliance"),
    ("MAT-020", "Material Sampling SOP", "v3.0", "Materials Management"),
];

pub(crate) const QUESTION_COURSE_CODE: &str = "GMP-001";

pub struct CourseCatalog;

impl Seed for CourseCatalog {
    fn version(&self) -> i64 {
        20260101000400
    }

    fn description(&self) -> &str {
        "course_catalog"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        if !workspace.training.courses.is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        workspace.training.courses = COURSES
            .iter()
            .map(|(code, name, version, category)| Course {
                id: CourseId::new(),
                code: code.to_string(),
                name: name.to_string(),
                version: version.to_string(),
                category: category.to_string(),
            })
            .collect();
        Ok(SeedOutcome::Applied)
    }
}

/// The import template's example questions, loaded into the GMP fundamentals course.
pub struct QuestionSamples;

impl Seed for QuestionSamples {
    fn version(&self) -> i64 {
        20260101000450
    }

    fn description(&self) -> &str {
        "question_samples"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        let course_id = workspace
            .training
            .courses
            .iter()
            .find(|c| c.code == QUESTION_COURSE_CODE)
            .map(|c| c.id.clone())
            .ok_or_else(|| SeedError::MissingReference(format!("course {}", QUESTION_COURSE_CODE)))?;

        if !workspace.questions.for_course(&course_id).is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let report = csv::import_csv(&csv::template(), &course_id, &[]);
        workspace.questions.add_all(report.imported);
        Ok(SeedOutcome::Applied)
    }
}
