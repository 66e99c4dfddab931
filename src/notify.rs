//! Delivery of accepted submissions to the company and the submitter.
//!
//! `Notifier` is an enum over concrete backends, built once from config by
//! [`build`].  The only backend is [`LogOnly`]: mail and SMS credentials do
//! not exist yet, so it records that delivery was skipped and succeeds.
//! Adding a backend = new struct + new variant + new `notify` arm.

use thiserror::Error;
use tracing::debug;

use crate::config::NotifyConfig;
use crate::forms::Submission;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("unknown notify backend: {0}")]
    UnknownBackend(String),
}

/// Construct the configured notifier.
pub fn build(config: &NotifyConfig) -> Result<Notifier, NotifyError> {
    match config.backend.as_str() {
        "log" => Ok(Notifier::LogOnly(LogOnly)),
        other => Err(NotifyError::UnknownBackend(other.to_string())),
    }
}

#[derive(Debug, Clone)]
pub enum Notifier {
    LogOnly(LogOnly),
}

impl Notifier {
    pub async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        match self {
            Notifier::LogOnly(n) => n.notify(submission).await,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Notifier::LogOnly(_) => "log",
        }
    }
}

/// Backend that sends nothing.
#[derive(Debug, Clone)]
pub struct LogOnly;

impl LogOnly {
    pub async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        debug!(
            form = submission.kind().consent_subject(),
            reply_to = %submission.reply_to(),
            "delivery not configured, confirmation and staff notification skipped"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormFields, QuoteRequest, RequestMeta, SubmissionContext, accept};
    use serde_json::json;

    #[test]
    fn build_log_backend() {
        let n = build(&crate::config::Config::test_default().notify).unwrap();
        assert_eq!(n.backend_name(), "log");
    }

    #[test]
    fn unknown_backend_rejected() {
        let err = build(&NotifyConfig { backend: "smtp".into() }).unwrap_err();
        assert!(err.to_string().contains("smtp"));
    }

    #[tokio::test]
    async fn log_only_always_succeeds() {
        let fields = FormFields::from_value(json!({
            "company": "Acme", "contactName": "Kim", "email": "kim@acme.example",
            "phone": "5550001111", "origin": "A", "destination": "B",
            "commodity": "Steel", "weight": "20000 lb", "pickupDate": "2026-12-01",
            "smsConsent": true,
        }));
        let quote: QuoteRequest =
            accept(&fields, SubmissionContext::now(RequestMeta::unknown())).unwrap();
        let submission = Submission::from(quote);
        assert_eq!(submission.reply_to(), "kim@acme.example");

        let n = Notifier::LogOnly(LogOnly);
        assert!(n.notify(&submission).await.is_ok());
    }
}
