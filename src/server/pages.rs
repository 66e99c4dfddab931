//! HTML page handlers.
//!
//! Known pages get an explicit route each.  `fallback` also resolves the
//! trailing-slash spelling of a page (`/safety/`) and answers everything else
//! with the 404 page.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::site::{self, Page};

use super::AppState;

/// GET <page path>
pub(super) fn page(page: Page, state: &AppState) -> Html<String> {
    Html(site::render(page, &state.site))
}

/// Any unmatched request.
pub(super) async fn fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::GET || method == Method::HEAD {
        if let Some(p) = Page::from_path(uri.path()) {
            return page(p, &state).into_response();
        }
    }
    debug!(%method, path = uri.path(), "no route");
    (StatusCode::NOT_FOUND, Html(site::render_not_found(&state.site))).into_response()
}
