use axum::Router;

use crate::app::AppState;

/// Generic hierarchy manager routes, shared by every domain.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(crate::app::features::hierarchy::get_tree::routes())
        .merge(crate::app::features::hierarchy::create_node::routes())
        .merge(crate::app::features::hierarchy::update_node::routes())
        .merge(crate::app::features::hierarchy::delete_node::routes())
        .merge(crate::app::features::hierarchy::toggle::routes())
        .merge(crate::app::features::hierarchy::selection::routes())
}
