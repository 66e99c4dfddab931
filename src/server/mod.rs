//! Axum HTTP server: form endpoints under `/api/forms/`, static pages
//! everywhere else.
//!
//! ## URL layout
//!
//! ```text
//! POST    /api/forms/contact
//! POST    /api/forms/driver-application
//! POST    /api/forms/quote
//! OPTIONS /api/forms/*                                   → CORS preflight
//! GET     /api/health
//! GET     /favicon.ico                                    → 204
//! GET     /, /services, /shippers, /drivers, /safety,
//!         /about, /quote, /contact, /privacy, /sms-terms  → HTML
//! *       anything else                                   → 404 page
//! ```

mod api;
mod pages;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::config::SiteConfig;
use crate::error::{AppError, SubmissionError};
use crate::forms::IdGenerator;
use crate::notify::Notifier;
use crate::site::Page;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone.  The site record is read-only; the id generator is the
/// only shared datum that changes, and it is atomic.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub ids: Arc<IdGenerator>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(site: SiteConfig, notifier: Notifier) -> Self {
        Self {
            site: Arc::new(site),
            ids: Arc::new(IdGenerator::new()),
            notifier,
        }
    }
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn run(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    let local_addr = listener.local_addr()?;
    info!(%local_addr, site = %state.site.name, "http server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

    info!("http server shut down");
    Ok(())
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    // Form intake.  The CORS layer answers OPTIONS itself.
    let forms = Router::new()
        .route("/contact",            post(api::contact))
        .route("/driver-application", post(api::driver_application))
        .route("/quote",              post(api::quote))
        .layer(forms_cors());

    let mut router = Router::new()
        .nest("/api/forms", forms)
        .route("/api/health",  get(api::health))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }));

    for &page in Page::ALL {
        router = router.route(
            page.path(),
            get(move |State(state): State<AppState>| async move { pages::page(page, &state) }),
        );
    }

    router
        .fallback(pages::fallback)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin may POST JSON to the form endpoints.
fn forms_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// A panicking handler is an unexpected failure like any other.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(%detail, "handler panicked");
    SubmissionError::Internal(format!("handler panicked: {detail}")).into_response()
}
