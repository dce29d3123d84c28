use crate::app::{
    domain::{CourseId, NodeId, PlanId},
    error::AppError,
    hierarchy::{org_settings, HierarchyStore},
    training::TrainingBook,
};

/// Parse organization unit ids and require each to sit at `depth` in the organization forest.
pub fn resolve_units(
    store: &HierarchyStore,
    raw_ids: &[String],
    depth: usize,
    label: &str,
) -> Result<Vec<NodeId>, AppError> {
    let mut ids = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        let id = NodeId::from_string(raw)
            .ok()
            .filter(|id| org_settings::is_unit_at(store, id, depth))
            .ok_or_else(|| AppError::Validation(format!("Unknown {}: {}", label, raw)))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Parse catalog course ids, keeping first-seen order and dropping repeats.
pub fn resolve_courses(book: &TrainingBook, raw_ids: &[String]) -> Result<Vec<CourseId>, AppError> {
    let mut ids = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        let id = CourseId::from_string(raw)
            .ok()
            .filter(|id| book.course(id).is_some())
            .ok_or_else(|| AppError::Validation(format!("Unknown course: {}", raw)))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

pub fn parse_plan_id(raw: &str) -> Result<PlanId, AppError> {
    PlanId::from_string(raw).map_err(|_| AppError::NotFound("Plan not found".to_string()))
}
