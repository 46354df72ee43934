//! HTTP middleware.

pub mod metrics;
pub mod path_gate;

pub use path_gate::{path_gate, PageTitle};
