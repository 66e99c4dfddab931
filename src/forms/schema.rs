//! Declarative field rules and the one validator that consumes them.
//!
//! A [`FormSchema`] lists the required fields of a form and the format rules
//! applied to individual fields.  [`validate`] runs the same three passes for
//! every form: consent, presence, rules.  The first failure wins.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::SubmissionError;

use super::FormKind;

/// Field carrying the SMS opt-in flag on every form.
pub const CONSENT_FIELD: &str = "smsConsent";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern")
});

/// A format check applied to one field after presence has been established.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Permissive `local@domain.tld`.
    Email,
    /// At least `min_digits` ASCII digits once everything else is stripped.
    Phone { min_digits: usize },
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// Exact membership in a fixed set; `label` names the choice in errors.
    OneOf {
        allowed: &'static [&'static str],
        label: &'static str,
    },
}

/// Static description of one form.
#[derive(Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    /// Required fields in the order they are reported when missing.
    /// `smsConsent` is checked separately and is not listed here.
    pub required: &'static [&'static str],
    pub rules: &'static [(&'static str, Rule)],
}

// ── Field access ──────────────────────────────────────────────────────────────

/// The flat key/value body of a submission.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    map: Map<String, Value>,
}

impl FormFields {
    /// Parse a raw request body.
    ///
    /// Invalid JSON is an unexpected failure, not a client error.  A valid
    /// JSON value that is not an object carries no fields.
    pub fn from_body(body: &[u8]) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SubmissionError::Internal(format!("request body is not JSON: {e}")))?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { map },
            _ => Self::default(),
        }
    }

    /// `true` when the field exists and is not `null`, `false`, `0` or `""`.
    pub fn is_present(&self, key: &str) -> bool {
        match self.map.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    /// Consent counts only as the JSON boolean `true`.
    pub fn has_consent(&self) -> bool {
        matches!(self.map.get(CONSENT_FIELD), Some(Value::Bool(true)))
    }

    /// Text of a field.  Strings are returned as-is; other non-null values by
    /// their JSON text, so `"weight": 42000` reads as `"42000"`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.map.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Text of a field validation has already required.
    pub fn required_text(&self, key: &str) -> Result<String, SubmissionError> {
        self.text(key)
            .ok_or_else(|| SubmissionError::Internal(format!("validated field `{key}` is absent")))
    }

    /// Text of an optional field, with empty or absent values replaced.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.text(key) {
            Some(s) if !s.is_empty() => s,
            _ => default.to_string(),
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

pub fn validate(schema: &FormSchema, fields: &FormFields) -> Result<(), SubmissionError> {
    if !fields.has_consent() {
        return Err(SubmissionError::ConsentRequired(schema.kind.consent_subject()));
    }

    let missing: Vec<&'static str> = schema
        .required
        .iter()
        .copied()
        .filter(|key| !fields.is_present(key))
        .collect();
    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }

    for (key, rule) in schema.rules {
        // Rules only ever target required fields, but an optional one that
        // was left out has nothing to check.
        let Some(value) = fields.text(key) else {
            continue;
        };
        check(rule, &value)?;
    }

    Ok(())
}

fn check(rule: &Rule, value: &str) -> Result<(), SubmissionError> {
    match *rule {
        Rule::Email => {
            if !EMAIL_RE.is_match(value) {
                return Err(SubmissionError::InvalidEmail);
            }
        }
        Rule::Phone { min_digits } => {
            if value.chars().filter(char::is_ascii_digit).count() < min_digits {
                return Err(SubmissionError::InvalidPhone);
            }
        }
        Rule::Length { min, max } => {
            let len = value.chars().count();
            if len < min {
                return Err(SubmissionError::MessageTooShort(min));
            }
            if len > max {
                return Err(SubmissionError::MessageTooLong(max));
            }
        }
        Rule::OneOf { allowed, label } => {
            if !allowed.contains(&value) {
                return Err(SubmissionError::InvalidChoice(label));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CHOICES: &[&str] = &["red", "green"];

    static SCHEMA: FormSchema = FormSchema {
        kind: FormKind::Contact,
        required: &["name", "email", "phone", "note"],
        rules: &[
            ("email", Rule::Email),
            ("phone", Rule::Phone { min_digits: 10 }),
            ("note", Rule::Length { min: 3, max: 5 }),
            ("colour", Rule::OneOf { allowed: CHOICES, label: "colour" }),
        ],
    };

    fn fields(v: Value) -> FormFields {
        FormFields::from_value(v)
    }

    fn valid() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-123-4567",
            "note": "hey",
            "smsConsent": true,
        })
    }

    fn with(key: &str, value: Value) -> FormFields {
        let mut v = valid();
        v[key] = value;
        fields(v)
    }

    #[test]
    fn valid_body_passes() {
        assert_eq!(validate(&SCHEMA, &fields(valid())), Ok(()));
    }

    #[test]
    fn consent_checked_before_anything_else() {
        let err = validate(&SCHEMA, &fields(json!({ "smsConsent": false }))).unwrap_err();
        assert_eq!(err, SubmissionError::ConsentRequired("contact form"));

        let err = validate(&SCHEMA, &fields(json!({}))).unwrap_err();
        assert!(matches!(err, SubmissionError::ConsentRequired(_)));
    }

    #[test]
    fn consent_must_be_boolean_true() {
        for v in [json!("true"), json!(1), json!("yes"), Value::Null] {
            let err = validate(&SCHEMA, &with("smsConsent", v.clone())).unwrap_err();
            assert!(matches!(err, SubmissionError::ConsentRequired(_)), "{v}");
        }
    }

    #[test]
    fn missing_fields_reported_in_schema_order() {
        let mut v = valid();
        v.as_object_mut().unwrap().remove("phone");
        v["name"] = json!("");
        let err = validate(&SCHEMA, &fields(v)).unwrap_err();
        assert_eq!(err, SubmissionError::MissingFields(vec!["name", "phone"]));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for v in [json!(""), json!(0), json!(false), Value::Null] {
            let err = validate(&SCHEMA, &with("name", v.clone())).unwrap_err();
            assert_eq!(err, SubmissionError::MissingFields(vec!["name"]), "{v}");
        }
    }

    #[test]
    fn non_object_body_has_no_fields() {
        let f = fields(json!(["name", "email"]));
        assert!(!f.is_present("name"));
        assert!(!f.has_consent());
    }

    #[test]
    fn email_rule() {
        let err = validate(&SCHEMA, &with("email", json!("not-an-email"))).unwrap_err();
        assert_eq!(err, SubmissionError::InvalidEmail);
        for bad in ["a b@c.d", "a@b", "@b.c", "a@@b.c"] {
            assert!(check(&Rule::Email, bad).is_err(), "{bad}");
        }
        assert!(check(&Rule::Email, "user@example.com").is_ok());
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_match("dispatch@cfti.example"));
    }

    #[test]
    fn phone_rule_counts_digits_only() {
        let rule = Rule::Phone { min_digits: 10 };
        assert_eq!(check(&rule, "(555) 123-456"), Err(SubmissionError::InvalidPhone));
        assert!(check(&rule, "(555) 123-4567").is_ok());
        assert!(check(&rule, "+1 555 123 4567").is_ok());
    }

    #[test]
    fn length_rule_is_inclusive() {
        let rule = Rule::Length { min: 3, max: 5 };
        assert_eq!(check(&rule, "ab"), Err(SubmissionError::MessageTooShort(3)));
        assert!(check(&rule, "abc").is_ok());
        assert!(check(&rule, "abcde").is_ok());
        assert_eq!(check(&rule, "abcdef"), Err(SubmissionError::MessageTooLong(5)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rule = Rule::Length { min: 3, max: 5 };
        assert!(check(&rule, "ééééé").is_ok());
    }

    #[test]
    fn one_of_rule_only_when_field_given() {
        assert_eq!(validate(&SCHEMA, &fields(valid())), Ok(()));
        let err = validate(&SCHEMA, &with("colour", json!("blue"))).unwrap_err();
        assert_eq!(err, SubmissionError::InvalidChoice("colour"));
        assert!(validate(&SCHEMA, &with("colour", json!("green"))).is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut v = valid();
        v["email"] = json!("nope");
        v["phone"] = json!("123");
        let err = validate(&SCHEMA, &fields(v)).unwrap_err();
        assert_eq!(err, SubmissionError::InvalidEmail);
    }

    #[test]
    fn numbers_read_as_text() {
        let f = fields(json!({ "weight": 42000, "flag": true }));
        assert_eq!(f.text("weight").as_deref(), Some("42000"));
        assert_eq!(f.text("flag").as_deref(), Some("true"));
        assert_eq!(f.text("absent"), None);
    }

    #[test]
    fn text_or_replaces_empty() {
        let f = fields(json!({ "a": "", "b": "set" }));
        assert_eq!(f.text_or("a", "None"), "None");
        assert_eq!(f.text_or("b", "None"), "set");
        assert_eq!(f.text_or("c", "None"), "None");
    }

    #[test]
    fn invalid_json_is_internal() {
        let err = FormFields::from_body(b"{not json").unwrap_err();
        assert!(matches!(err, SubmissionError::Internal(_)));
    }
}
