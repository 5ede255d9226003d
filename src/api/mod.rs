//! HTTP API module: intake, catalog, health, metrics and docs endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{cors_layer, create_app, create_router};
