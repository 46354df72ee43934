//! Response construction.
//!
//! # Responsibilities
//! - 302 redirects between page routes
//! - 404 for paths outside the page grammar
//! - 500 for storage and template failures
//!
//! # Design Decisions
//! - Redirects are `302 Found`, not axum's default `303 See Other`
//! - Raw error text goes to the client only when the config allows it
//! - Every 500 is logged with its full error

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::fmt::Display;

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Body sent with a 500 when internal errors are hidden.
pub const GENERIC_ERROR_BODY: &str = "Internal Server Error\n";

/// `302 Found` pointing at `location`.
pub fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// `404` with the plain-text not-found body.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// `500` carrying `err`'s message, or a generic body when `expose` is false.
pub fn internal_error(err: &dyn Display, expose: bool) -> Response {
    let body = if expose {
        format!("{err}\n")
    } else {
        GENERIC_ERROR_BODY.to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
