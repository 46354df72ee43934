//! Template rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     template directory
//!     → templates.rs (read view.html, edit.html)
//!     → Renderer (parsed once, immutable)
//!     → shared via Arc in AppState
//!
//! Per request:
//!     handler → Renderer::render(view, page) → HTML string
//! ```
//!
//! # Design Decisions
//! - No global template state; the renderer is built explicitly
//! - A missing or broken template fails startup, not the first request
//! - HTML auto-escaping is on for `.html` templates

pub mod templates;

pub use templates::{RenderError, Renderer, TemplateView};
