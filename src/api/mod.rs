//! HTTP API: router, shared state, and route handlers.

pub mod routes;
pub mod server;

pub use server::{build_router, start_server, AppState};
