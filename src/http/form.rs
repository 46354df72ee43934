//! Save form extraction.
//!
//! # Responsibilities
//! - Read the `body` field from a urlencoded or multipart request body
//! - Fall back to the `body` query parameter
//! - Treat an unreadable or absent form as an empty body
//!
//! # Design Decisions
//! - Only POST, PUT and PATCH bodies are parsed as forms
//! - A body field takes precedence over the query string
//! - Malformed forms are logged, never rejected

use axum::{
    extract::{FromRequest, Multipart, Query, Request},
    http::{header, Method},
    Form,
};
use serde::Deserialize;
use std::convert::Infallible;

const FIELD: &str = "body";

#[derive(Debug, Default, Deserialize)]
struct SaveForm {
    body: Option<String>,
}

/// Raw bytes of the submitted `body` field; empty when none was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveBody(pub Vec<u8>);

impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<SaveForm>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(form)| form.body)
            .map(String::into_bytes);

        let from_body = if carries_form(req.method()) {
            match media_type(&req).as_deref() {
                Some("application/x-www-form-urlencoded") => urlencoded_field(req, state).await,
                Some("multipart/form-data") => multipart_field(req, state).await,
                _ => None,
            }
        } else {
            None
        };

        Ok(SaveBody(from_body.or(from_query).unwrap_or_default()))
    }
}

fn carries_form(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Lowercased media type without parameters, e.g. `multipart/form-data`.
fn media_type(req: &Request) -> Option<String> {
    let value = req.headers().get(header::CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next()?.trim();
    Some(essence.to_ascii_lowercase())
}

async fn urlencoded_field<S: Send + Sync>(req: Request, state: &S) -> Option<Vec<u8>> {
    match Form::<SaveForm>::from_request(req, state).await {
        Ok(Form(form)) => form.body.map(String::into_bytes),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unreadable urlencoded form");
            None
        }
    }
}

async fn multipart_field<S: Send + Sync>(req: Request, state: &S) -> Option<Vec<u8>> {
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unreadable multipart form");
            return None;
        }
    };

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FIELD) => {
                return match field.bytes().await {
                    Ok(bytes) => Some(bytes.to_vec()),
                    Err(e) => {
                        tracing::debug!(error = %e, "Ignoring unreadable multipart field");
                        None
                    }
                };
            }
            Ok(Some(_)) => continue,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed multipart form");
                return None;
            }
        }
    }
}
