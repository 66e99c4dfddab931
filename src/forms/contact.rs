//! General contact form.

use serde_json::{Map, Value};
use tracing::info;

use crate::error::SubmissionError;

use super::schema::{FormFields, FormSchema, Rule};
use super::{FormKind, FormRecord, RequestMeta, SubmissionContext};

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    /// Lower-cased.  Surrounding whitespace never reaches here: the email
    /// rule rejects it.
    pub email: String,
    pub phone: String,
    pub message: String,
    pub sms_consent: bool,
    pub submitted_at: String,
    pub meta: RequestMeta,
}

impl FormRecord for ContactSubmission {
    const SCHEMA: FormSchema = FormSchema {
        kind: FormKind::Contact,
        required: &["name", "email", "phone", "message"],
        rules: &[
            ("email", Rule::Email),
            ("phone", Rule::Phone { min_digits: 10 }),
            (
                "message",
                Rule::Length {
                    min: MESSAGE_MIN_CHARS,
                    max: MESSAGE_MAX_CHARS,
                },
            ),
        ],
    };

    fn from_fields(fields: &FormFields, ctx: SubmissionContext) -> Result<Self, SubmissionError> {
        Ok(Self {
            name: fields.required_text("name")?.trim().to_string(),
            email: fields.required_text("email")?.trim().to_lowercase(),
            phone: fields.required_text("phone")?.trim().to_string(),
            message: fields.required_text("message")?.trim().to_string(),
            sms_consent: fields.has_consent(),
            submitted_at: ctx.submitted_at_text(),
            meta: ctx.meta,
        })
    }

    fn log_received(&self) {
        info!(
            name = %self.name,
            email = %self.email,
            phone = %self.phone,
            message_length = self.message.chars().count(),
            sms_consent = self.sms_consent,
            ip_address = %self.meta.ip_address,
            user_agent = %self.meta.user_agent,
            "contact form submission received"
        );
    }

    fn echo(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("name".into(), self.name.clone().into());
        data.insert("email".into(), self.email.clone().into());
        data.insert("submittedAt".into(), self.submitted_at.clone().into());
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::accept;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "name": "  Dana Hauler ",
            "email": "Dana@Example.COM",
            "phone": "(555) 123-4567",
            "message": "Need a lane from Fresno to Reno.",
            "smsConsent": true,
        })
    }

    fn submit(v: Value) -> Result<ContactSubmission, SubmissionError> {
        accept(&FormFields::from_value(v), SubmissionContext::now(RequestMeta::unknown()))
    }

    #[test]
    fn normalizes_fields() {
        let s = submit(body()).unwrap();
        assert_eq!(s.name, "Dana Hauler");
        assert_eq!(s.email, "dana@example.com");
        assert!(s.sms_consent);
        assert!(s.submitted_at.ends_with('Z'));
    }

    #[test]
    fn echo_has_name_email_and_timestamp() {
        let s = submit(body()).unwrap();
        let data = s.echo();
        assert_eq!(data["name"], "Dana Hauler");
        assert_eq!(data["email"], "dana@example.com");
        assert!(data.contains_key("submittedAt"));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn message_bounds() {
        let mut v = body();
        v["message"] = json!("a".repeat(9));
        assert_eq!(submit(v.clone()).unwrap_err(), SubmissionError::MessageTooShort(10));

        v["message"] = json!("a".repeat(10));
        assert!(submit(v.clone()).is_ok());

        v["message"] = json!("a".repeat(2000));
        assert!(submit(v.clone()).is_ok());

        v["message"] = json!("a".repeat(2001));
        assert_eq!(submit(v).unwrap_err(), SubmissionError::MessageTooLong(2000));
    }

    #[test]
    fn message_length_counts_characters() {
        let mut v = body();
        v["message"] = json!("🚚".repeat(5));
        assert_eq!(submit(v.clone()).unwrap_err(), SubmissionError::MessageTooShort(10));

        v["message"] = json!("🚚".repeat(10));
        assert!(submit(v).is_ok());
    }

    #[test]
    fn phone_needs_ten_digits() {
        let mut v = body();
        v["phone"] = json!("555-123-456");
        assert_eq!(submit(v.clone()).unwrap_err(), SubmissionError::InvalidPhone);

        v["phone"] = json!("5551234567");
        assert!(submit(v).is_ok());
    }

    #[test]
    fn bad_email_rejected() {
        let mut v = body();
        v["email"] = json!("not-an-email");
        assert_eq!(submit(v).unwrap_err(), SubmissionError::InvalidEmail);
    }

    #[test]
    fn padded_email_rejected() {
        let mut v = body();
        v["email"] = json!("  dana@example.com ");
        assert_eq!(submit(v).unwrap_err(), SubmissionError::InvalidEmail);
    }

    #[test]
    fn every_required_field_is_enforced() {
        for key in ["name", "email", "phone", "message"] {
            let mut v = body();
            v.as_object_mut().unwrap().remove(key);
            assert_eq!(
                submit(v).unwrap_err(),
                SubmissionError::MissingFields(vec![key]),
                "{key}"
            );
        }
    }
}
