//! Question CSV: comma-separated fields, `|`-separated multi-values, UTF-8 with a BOM so
//! spreadsheet tools pick the right encoding.

use std::collections::HashSet;

use serde::Serialize;

use super::{Difficulty, Question, QuestionType};
use crate::app::csv_text::{self, split_multi};
use crate::app::domain::CourseId;

pub use crate::app::csv_text::BOM;
pub const MULTI_VALUE_SEPARATOR: char = '|';
pub const EXPORT_HEADER: &str = "Type,Content,Options,Answer,Score,Difficulty,Explanation";
pub const TEMPLATE_HEADER: &str =
    "Type,Content,Options (split by |),Answer (Index or Text),Score,Difficulty,Explanation";

/// Multiple-choice questions need at least this many options.
pub const MIN_MULTIPLE_OPTIONS: usize = 4;

const FIELD_COUNT: usize = 7;

const TEMPLATE_ROWS: &[&str] = &[
    "single,What is the core principle of GMP?,Prevent contamination|Prevent mix-ups|All of the above,2,5,Medium,\"Minimise contamination, cross-contamination, mix-ups and errors in manufacturing.\"",
    "multiple,Which of the following are GxP regulations?,GMP|GCP|GDP|ISO9001,0|1|2,5,High,ISO 9001 is not a GxP regulation.",
    "blank,The core of aseptic processing is controlling ___.,,microorganisms,5,High,",
];

/// One rejected row of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub content: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub total: usize,
    pub imported: Vec<Question>,
    pub failures: Vec<ImportFailure>,
}

/// Downloadable template: header plus one example per question type.
pub fn template() -> String {
    csv_text::document(TEMPLATE_HEADER, TEMPLATE_ROWS)
}

/// Every field quoted, embedded quotes doubled.
pub fn export_csv(questions: &[&Question]) -> String {
    let separator = MULTI_VALUE_SEPARATOR.to_string();
    let rows = questions.iter().map(|q| {
        csv_text::quoted_line(&[
            q.kind.to_string(),
            q.content.clone(),
            q.options.join(&separator),
            q.answer.join(&separator),
            q.score.to_string(),
            q.difficulty.to_string(),
            q.explanation.clone(),
        ])
    });
    csv_text::document(EXPORT_HEADER, rows)
}

fn parse_row(fields: &[String], course_id: &CourseId) -> Result<Question, String> {
    let field = |i: usize| fields.get(i).map(|f| f.trim()).unwrap_or("");

    let kind: QuestionType = field(0)
        .to_lowercase()
        .parse()
        .map_err(|_| format!("Unknown question type '{}'", field(0)))?;

    let content = field(1);
    if content.is_empty() {
        return Err("Missing question content".to_string());
    }

    let options = split_multi(field(2), MULTI_VALUE_SEPARATOR);
    let answer = split_multi(field(3), MULTI_VALUE_SEPARATOR);
    if answer.is_empty() {
        return Err("Missing answer".to_string());
    }

    if kind != QuestionType::Blank {
        if options.is_empty() {
            return Err("Choice questions need options".to_string());
        }
        if kind == QuestionType::Multiple && options.len() < MIN_MULTIPLE_OPTIONS {
            return Err(format!(
                "Multiple-choice questions need at least {} options",
                MIN_MULTIPLE_OPTIONS
            ));
        }
        if kind == QuestionType::Single && answer.len() != 1 {
            return Err("Single-choice questions take exactly one answer".to_string());
        }
        for a in &answer {
            match a.parse::<usize>() {
                Ok(i) if i < options.len() => {}
                _ => return Err(format!("Answer '{}' is not a valid option index", a)),
            }
        }
    }

    let score = field(4)
        .parse::<u32>()
        .map_err(|_| format!("Invalid score '{}'", field(4)))?;
    let difficulty: Difficulty = field(5)
        .parse()
        .map_err(|_| format!("Unknown difficulty '{}'", field(5)))?;

    Ok(Question {
        id: ulid::Ulid::new().to_string(),
        course_id: course_id.clone(),
        kind,
        content: content.to_string(),
        options,
        answer,
        score,
        difficulty,
        explanation: field(6).to_string(),
    })
}

/// Validate and convert every data row. Rows repeating the content of an existing question
/// of the same course (or an earlier row) are rejected.
pub fn import_csv(text: &str, course_id: &CourseId, existing: &[&Question]) -> ImportReport {
    let records = csv_text::data_records(text, "type");

    let mut seen: HashSet<String> = existing.iter().map(|q| q.content.trim().to_string()).collect();
    let mut imported = Vec::new();
    let mut failures = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        let content = record.get(1).map(|c| c.trim().to_string()).unwrap_or_default();

        if record.len() > FIELD_COUNT {
            failures.push(ImportFailure {
                row,
                content,
                reason: format!("Expected {} fields, found {}", FIELD_COUNT, record.len()),
            });
            continue;
        }

        match parse_row(record, course_id) {
            Ok(question) if !seen.insert(question.content.clone()) => failures.push(ImportFailure {
                row,
                content,
                reason: "Duplicates an existing question".to_string(),
            }),
            Ok(question) => imported.push(question),
            Err(reason) => failures.push(ImportFailure { row, content, reason }),
        }
    }

    tracing::info!(
        course_id = %course_id,
        total = records.len(),
        imported = imported.len(),
        failed = failures.len(),
        "question import processed"
    );

    ImportReport {
        total: records.len(),
        imported,
        failures,
    }
}
