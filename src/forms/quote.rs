//! Shipper quote request.

use serde_json::{Map, Value};
use tracing::info;

use crate::error::SubmissionError;

use super::schema::{FormFields, FormSchema, Rule};
use super::{FormKind, FormRecord, RequestMeta, SubmissionContext};

const NO_PICKUP_TIME: &str = "Not specified";
const NO_NOTES: &str = "None";

#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub commodity: String,
    /// Free text as entered; units are whatever the shipper wrote.
    pub weight: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub special_notes: String,
    pub sms_consent: bool,
    pub submitted_at: String,
    pub meta: RequestMeta,
}

impl QuoteRequest {
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

impl FormRecord for QuoteRequest {
    const SCHEMA: FormSchema = FormSchema {
        kind: FormKind::Quote,
        required: &[
            "company",
            "contactName",
            "email",
            "phone",
            "origin",
            "destination",
            "commodity",
            "weight",
            "pickupDate",
        ],
        rules: &[("email", Rule::Email)],
    };

    fn from_fields(fields: &FormFields, ctx: SubmissionContext) -> Result<Self, SubmissionError> {
        Ok(Self {
            company: fields.required_text("company")?,
            contact_name: fields.required_text("contactName")?,
            email: fields.required_text("email")?,
            phone: fields.required_text("phone")?,
            origin: fields.required_text("origin")?,
            destination: fields.required_text("destination")?,
            commodity: fields.required_text("commodity")?,
            weight: fields.required_text("weight")?,
            pickup_date: fields.required_text("pickupDate")?,
            pickup_time: fields.text_or("pickupTime", NO_PICKUP_TIME),
            special_notes: fields.text_or("specialNotes", NO_NOTES),
            sms_consent: fields.has_consent(),
            submitted_at: ctx.submitted_at_text(),
            meta: ctx.meta,
        })
    }

    fn log_received(&self) {
        info!(
            company = %self.company,
            contact = %self.contact_name,
            route = %self.route(),
            commodity = %self.commodity,
            weight = %self.weight,
            pickup = %self.pickup_date,
            ip_address = %self.meta.ip_address,
            "quote request received"
        );
    }

    fn echo(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("company".into(), self.company.clone().into());
        data.insert("contactName".into(), self.contact_name.clone().into());
        data.insert("submittedAt".into(), self.submitted_at.clone().into());
        data
    }
}
