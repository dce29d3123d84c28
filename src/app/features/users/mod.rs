mod directory;
mod import;

use axum::Router;

use crate::app::AppState;

/// Trainee account routes (directory, enrolment, status, bulk import).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(directory::routes())
        .merge(import::routes())
}
