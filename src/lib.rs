pub mod aggregate;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod seed;
pub mod server;
pub mod store;

pub use server::{active_router, build_router, gated_router};

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Seeded records; read-only once the server is up.
    pub store: store::ResultStore,
}
