//! Inbound form intake: contact, driver application and quote request.
//!
//! Each form is a [`FormRecord`]: a static [`FormSchema`] plus a typed record
//! built from the validated fields.  The HTTP layer drives every form through
//! the same generic path, so the three endpoints differ only in their schema
//! and record type.
//!
//! Nothing here is stored.  A record lives for one request: it is logged,
//! handed to the [`crate::notify::Notifier`], echoed back in part, and dropped.

pub mod contact;
pub mod driver;
pub mod ids;
pub mod quote;
pub mod schema;

use axum::http::{HeaderMap, HeaderName, header};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::error::SubmissionError;

pub use contact::ContactSubmission;
pub use driver::DriverApplication;
pub use ids::IdGenerator;
pub use quote::QuoteRequest;
pub use schema::{FormFields, FormSchema, Rule, validate};

const UNKNOWN: &str = "Unknown";

// ── FormKind ──────────────────────────────────────────────────────────────────

/// Which form a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    DriverApplication,
    Quote,
}

impl FormKind {
    /// Prefix of the generated reference id.
    pub fn id_prefix(self) -> &'static str {
        match self {
            FormKind::Contact => "CF",
            FormKind::DriverApplication => "DA",
            FormKind::Quote => "QT",
        }
    }

    /// Response key the reference id is returned under.
    pub fn id_field(self) -> &'static str {
        match self {
            FormKind::Contact => "contactId",
            FormKind::DriverApplication => "applicationId",
            FormKind::Quote => "quoteId",
        }
    }

    /// What the consent error says the caller is trying to submit.
    pub fn consent_subject(self) -> &'static str {
        match self {
            FormKind::Contact => "contact form",
            FormKind::DriverApplication => "driver application",
            FormKind::Quote => "quote request",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Contact form submitted successfully",
            FormKind::DriverApplication => "Driver application submitted successfully",
            FormKind::Quote => "Quote request submitted successfully",
        }
    }
}

// ── Request context ───────────────────────────────────────────────────────────

/// Caller details taken from request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    pub user_agent: String,
    pub ip_address: String,
}

impl RequestMeta {
    /// `X-Forwarded-For` wins over `X-Real-IP`; absent values read `"Unknown"`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ip_address = header_text(headers, &HeaderName::from_static("x-forwarded-for"))
            .or_else(|| header_text(headers, &HeaderName::from_static("x-real-ip")))
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            user_agent: header_text(headers, &header::USER_AGENT)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            ip_address,
        }
    }

    pub fn unknown() -> Self {
        Self {
            user_agent: UNKNOWN.to_string(),
            ip_address: UNKNOWN.to_string(),
        }
    }
}

fn header_text(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Server-side facts attached to every record.
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub submitted_at: DateTime<Utc>,
    pub meta: RequestMeta,
}

impl SubmissionContext {
    pub fn now(meta: RequestMeta) -> Self {
        Self {
            submitted_at: Utc::now(),
            meta,
        }
    }

    /// `submittedAt` as sent to the browser: RFC 3339, UTC, milliseconds.
    pub fn submitted_at_text(&self) -> String {
        self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

// ── FormRecord ────────────────────────────────────────────────────────────────

/// A typed submission that can be built from validated fields.
pub trait FormRecord: Sized + Into<Submission> {
    const SCHEMA: FormSchema;

    /// Build the normalized record.  Only called after [`validate`] passed.
    fn from_fields(fields: &FormFields, ctx: SubmissionContext) -> Result<Self, SubmissionError>;

    /// Emit the single structured log line for an accepted submission.
    fn log_received(&self);

    /// The few fields echoed back under `data` in the acknowledgment.
    fn echo(&self) -> Map<String, Value>;
}

/// Validate `fields` against `R`'s schema and build the record.
pub fn accept<R: FormRecord>(
    fields: &FormFields,
    ctx: SubmissionContext,
) -> Result<R, SubmissionError> {
    validate(&R::SCHEMA, fields)?;
    R::from_fields(fields, ctx)
}

/// Any accepted submission, as handed to the notifier.
#[derive(Debug, Clone)]
pub enum Submission {
    Contact(ContactSubmission),
    DriverApplication(DriverApplication),
    Quote(QuoteRequest),
}

impl Submission {
    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Contact(_) => FormKind::Contact,
            Submission::DriverApplication(_) => FormKind::DriverApplication,
            Submission::Quote(_) => FormKind::Quote,
        }
    }

    /// Address a confirmation would go to, if delivery existed.
    pub fn reply_to(&self) -> &str {
        match self {
            Submission::Contact(s) => &s.email,
            Submission::DriverApplication(s) => &s.email,
            Submission::Quote(s) => &s.email,
        }
    }
}

impl From<ContactSubmission> for Submission {
    fn from(s: ContactSubmission) -> Self {
        Submission::Contact(s)
    }
}

impl From<DriverApplication> for Submission {
    fn from(s: DriverApplication) -> Self {
        Submission::DriverApplication(s)
    }
}

impl From<QuoteRequest> for Submission {
    fn from(s: QuoteRequest) -> Self {
        Submission::Quote(s)
    }
}
