mod learn;
mod me;
mod tasks;

use axum::Router;

use crate::app::AppState;

/// Training hub routes: the current user's profile, tasks and learning actions.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(me::routes())
        .merge(tasks::routes())
        .merge(learn::routes())
}
