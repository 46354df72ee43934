//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, metrics)
//!     → middleware/path_gate.rs (validate /<action>/<title>, else 404)
//!     → handlers.rs (view / edit / save; form.rs reads the save body)
//!     → response.rs (redirects, errors)
//!     → Send to client
//! ```

pub mod form;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{build_router, AppState, WikiServer};
