//! Per-course assessment questions and their CSV template, export and import.

pub mod csv;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::app::domain::CourseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multiple,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub course_id: CourseId,
    pub kind: QuestionType,
    pub content: String,
    pub options: Vec<String>,
    /// Option indices for choice questions, the expected text for blanks.
    pub answer: Vec<String>,
    pub score: u32,
    pub difficulty: Difficulty,
    pub explanation: String,
}

/// Questions for every course, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn for_course(&self, course_id: &CourseId) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.course_id == *course_id).collect()
    }

    pub fn add_all(&mut self, questions: impl IntoIterator<Item = Question>) {
        self.questions.extend(questions);
    }

    /// Remove the listed questions of one course. Returns how many were removed.
    pub fn remove(&mut self, course_id: &CourseId, ids: &[String]) -> usize {
        let before = self.questions.len();
        self.questions
            .retain(|q| !(q.course_id == *course_id && ids.contains(&q.id)));
        before - self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(course_id: &CourseId, id: &str) -> Question {
        Question {
            id: id.to_string(),
            course_id: course_id.clone(),
            kind: QuestionType::Blank,
            content: format!("question {id}"),
            options: vec![],
            answer: vec!["microbes".into()],
            score: 5,
            difficulty: Difficulty::High,
            explanation: String::new(),
        }
    }

    #[test]
    fn remove_is_scoped_to_course() {
        let a = CourseId::new();
        let b = CourseId::new();
        let mut bank = QuestionBank::default();
        bank.add_all(vec![question(&a, "q1"), question(&a, "q2"), question(&b, "q1")]);

        assert_eq!(bank.remove(&a, &["q1".to_string()]), 1);
        assert_eq!(bank.for_course(&a).len(), 1);
        assert_eq!(bank.for_course(&b).len(), 1);
    }
}
