//! Page route handlers.
//!
//! Each handler runs behind the path gate, which has already validated the
//! title and stored it as a [`PageTitle`] extension.

use axum::{
    extract::{Extension, State},
    response::{Html, IntoResponse, Response},
};

use crate::http::form::SaveBody;
use crate::http::middleware::PageTitle;
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics::record_page_save;
use crate::pages::Page;
use crate::render::TemplateView;
use crate::routing::Action;

/// Show a page; a page that cannot be loaded redirects to its editor.
pub async fn view(
    State(state): State<AppState>,
    Extension(PageTitle(title)): Extension<PageTitle>,
) -> Response {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!(title = %title, error = %e, "Page missing, redirecting to editor");
            return response::found(Action::Edit.url_for(&title));
        }
    };
    render(&state, TemplateView::View, &page)
}

/// Edit form for a page; a missing page starts out blank.
pub async fn edit(
    State(state): State<AppState>,
    Extension(PageTitle(title)): Extension<PageTitle>,
) -> Response {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!(title = %title, error = %e, "Editing new page");
            Page::blank(title)
        }
    };
    render(&state, TemplateView::Edit, &page)
}

/// Persist the submitted body, then show the page.
pub async fn save(
    State(state): State<AppState>,
    Extension(PageTitle(title)): Extension<PageTitle>,
    SaveBody(body): SaveBody,
) -> Response {
    let page = Page::new(title, body);

    if let Err(e) = state.store.save(&page).await {
        tracing::error!(title = %page.title, error = %e, "Failed to save page");
        return response::internal_error(&e, state.expose_internal_errors);
    }

    record_page_save();
    tracing::info!(title = %page.title, bytes = page.body.len(), "Page saved");
    response::found(Action::View.url_for(&page.title))
}

fn render(state: &AppState, view: TemplateView, page: &Page) -> Response {
    match state.renderer.render(view, page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(
                title = %page.title,
                template = view.file_name(),
                error = %e,
                "Failed to render template"
            );
            response::internal_error(&e, state.expose_internal_errors)
        }
    }
}
