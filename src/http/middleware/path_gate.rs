//! Path validation gate.
//! Wraps each page handler; rejects any path outside the page grammar.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::response;
use crate::routing::{Action, PagePath};

/// Title extracted by the gate, available to the wrapped handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(pub String);

/// Let the request through only if its decoded path is `/<action>/<title>`
/// for the route's own action. Otherwise respond 404 without running the
/// handler.
pub async fn path_gate(
    State(action): State<Action>,
    mut request: Request,
    next: Next,
) -> Response {
    match PagePath::parse_encoded(request.uri().path()) {
        Some(path) if path.action == action => {
            request.extensions_mut().insert(PageTitle(path.title));
            next.run(request).await
        }
        _ => {
            tracing::debug!(
                action = %action,
                path = %request.uri().path(),
                "Rejected invalid page path"
            );
            response::not_found()
        }
    }
}
