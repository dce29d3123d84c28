mod helpers;
mod import_export;
mod list;
mod questions;

use axum::Router;

use crate::app::AppState;

/// Course catalog and question bank routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(list::routes())
        .merge(questions::routes())
        .merge(import_export::routes())
}
