use crate::app::{
    domain::CourseId,
    error::AppError,
    training::{Course, TrainingBook},
};

/// Look up a catalog course by its raw path id.
pub fn find_course<'a>(book: &'a TrainingBook, raw: &str) -> Result<&'a Course, AppError> {
    CourseId::from_string(raw)
        .ok()
        .and_then(|id| book.course(&id))
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}
