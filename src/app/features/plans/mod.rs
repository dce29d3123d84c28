mod create;
mod helpers;
mod list;
mod show;

use axum::Router;

use crate::app::AppState;

/// Annual plan routes (list, create, show).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(list::routes())
        .merge(create::routes())
        .merge(show::routes())
}
