//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (grammar /(view|edit|save)/<title>)
//!     → Return: PagePath { action, title } or no match
//! ```
//!
//! # Design Decisions
//! - The grammar is fixed at compile time
//! - Deterministic: same path always yields the same result
//! - No match means 404; the handler never runs

pub mod matcher;

pub use matcher::{is_valid_title, Action, PagePath};
