mod settings;

use axum::Router;

use crate::app::AppState;

/// Organization settings routes (company, department and position editors).
pub fn routes() -> Router<AppState> {
    Router::new().merge(settings::routes())
}
