pub mod api;
pub mod create_node;
pub mod delete_node;
pub mod get_tree;
pub mod helpers;
pub mod selection;
pub mod toggle;
pub mod types;
pub mod update_node;

pub use api::routes;
