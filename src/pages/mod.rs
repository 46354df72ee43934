//! Page persistence subsystem.
//!
//! # Data Flow
//! ```text
//! save handler
//!     → Page { title, body }
//!     → store.rs (write <dir>/<title>.txt, mode 0600)
//!
//! view / edit handlers
//!     → store.rs (read <dir>/<title>.txt)
//!     → Page or StoreError::NotFound
//! ```
//!
//! # Design Decisions
//! - One file per page, named after the title
//! - Titles are validated at the HTTP boundary, not here
//! - No locking: concurrent writers to one title race, last writer wins

pub mod page;
pub mod store;

pub use page::Page;
pub use store::{PageStore, StoreError};
