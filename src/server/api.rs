//! JSON form endpoints and health.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::error::SubmissionError;
use crate::forms::{
    self, ContactSubmission, DriverApplication, FormFields, FormRecord, QuoteRequest,
    RequestMeta, SubmissionContext,
};

use super::AppState;

// ── Form handlers ─────────────────────────────────────────────────────────────

pub(super) async fn contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    submit::<ContactSubmission>(&state, &headers, &body).await
}

pub(super) async fn driver_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    submit::<DriverApplication>(&state, &headers, &body).await
}

pub(super) async fn quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    submit::<QuoteRequest>(&state, &headers, &body).await
}

/// Shared intake path for all three forms.
async fn submit<R: FormRecord>(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Response {
    let kind = R::SCHEMA.kind;
    match process::<R>(state, headers, body).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => {
            if e.status() == StatusCode::BAD_REQUEST {
                warn!(form = kind.consent_subject(), error = %e, "submission rejected");
            }
            e.into_response()
        }
    }
}

async fn process<R: FormRecord>(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Value, SubmissionError> {
    let kind = R::SCHEMA.kind;
    let fields = FormFields::from_body(body)?;
    let ctx = SubmissionContext::now(RequestMeta::from_headers(headers));

    let record: R = forms::accept(&fields, ctx)?;
    record.log_received();
    let data = record.echo();

    state
        .notifier
        .notify(&record.into())
        .await
        .map_err(|e| SubmissionError::Internal(e.to_string()))?;

    let id = state.ids.next(kind.id_prefix());
    debug!(form = kind.consent_subject(), %id, "submission acknowledged");

    let mut ack = Map::new();
    ack.insert("success".into(), Value::Bool(true));
    ack.insert("message".into(), kind.success_message().into());
    ack.insert(kind.id_field().into(), id.into());
    ack.insert("data".into(), Value::Object(data));
    Ok(Value::Object(ack))
}

// ── Health ────────────────────────────────────────────────────────────────────

pub(super) async fn health(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "ok",
        "site": state.site.name,
        "notify": state.notifier.backend_name(),
    }))
    .into_response()
}
