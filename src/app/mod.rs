use std::sync::Arc;

use axum::Router;

/// Human-readable application name, reported by the service index.
pub const APP_NAME: &str = "G-Train";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub workspace: workspace::SharedWorkspace,
    pub advisor: Arc<dyn advisory::AdvisoryProvider>,
    pub config: config::Config,
}

/// API routes. Merged with site routes in lib.rs.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(features::hierarchy::routes())
        .merge(features::organization::routes())
        .merge(features::plans::routes())
        .merge(features::training::routes())
        .merge(features::courses::routes())
        .merge(features::users::routes())
        .merge(features::audit::routes())
        .merge(features::advisory::routes())
}

pub mod accounts;
pub mod advisory;
pub mod audit;
pub mod config;
pub mod csv_text;
pub mod domain;
pub mod error;
pub mod extract;
pub mod features;
pub mod hierarchy;
pub mod question_bank;
pub mod training;
pub mod workspace;
