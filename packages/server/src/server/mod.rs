// HTTP server: router wiring, middleware, routes, and the error/response
// normalization consumed by every handler.

pub mod app;
pub mod error;
pub mod middleware;
pub mod responses;
pub mod routes;

pub use app::{build_app, AppState};
