//! Page Wiki Library
//!
//! A small page-editing web service: pages are viewed, edited and saved
//! through `/view/<title>`, `/edit/<title>` and `/save/<title>`, and each
//! page lives in its own `<title>.txt` file.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod render;
pub mod routing;

pub use config::WikiConfig;
pub use http::WikiServer;
pub use lifecycle::Shutdown;
