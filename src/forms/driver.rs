//! Driver recruitment application.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::SubmissionError;

use super::schema::{FormFields, FormSchema, Rule};
use super::{FormKind, FormRecord, RequestMeta, SubmissionContext};

/// Implements `as_str`, `Display` and `FromStr` over a fixed wire vocabulary,
/// and exposes the vocabulary as `ALLOWED` for the schema.
macro_rules! choice {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALLOWED: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SubmissionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(SubmissionError::Internal(format!(
                        "unexpected {} value `{other}`",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

choice!(CdlClass {
    ClassA => "class-a",
    ClassB => "class-b",
    ClassC => "class-c",
});

choice!(Experience {
    TwoToThree => "2-3",
    FourToFive => "4-5",
    SixToTen => "6-10",
    TenPlus => "10+",
});

choice!(Employment {
    Yes => "yes",
    No => "no",
});

#[derive(Debug, Clone)]
pub struct DriverApplication {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub city_state: String,
    pub cdl_class: CdlClass,
    pub experience: Experience,
    pub currently_employed: Employment,
    pub sms_consent: bool,
    pub submitted_at: String,
    pub meta: RequestMeta,
}

impl FormRecord for DriverApplication {
    const SCHEMA: FormSchema = FormSchema {
        kind: FormKind::DriverApplication,
        required: &[
            "fullName",
            "phone",
            "email",
            "cityState",
            "cdlClass",
            "experience",
            "currentlyEmployed",
        ],
        rules: &[
            ("email", Rule::Email),
            (
                "cdlClass",
                Rule::OneOf {
                    allowed: CdlClass::ALLOWED,
                    label: "CDL class",
                },
            ),
            (
                "experience",
                Rule::OneOf {
                    allowed: Experience::ALLOWED,
                    label: "experience",
                },
            ),
            (
                "currentlyEmployed",
                Rule::OneOf {
                    allowed: Employment::ALLOWED,
                    label: "employment status",
                },
            ),
        ],
    };

    fn from_fields(fields: &FormFields, ctx: SubmissionContext) -> Result<Self, SubmissionError> {
        Ok(Self {
            full_name: fields.required_text("fullName")?,
            phone: fields.required_text("phone")?,
            email: fields.required_text("email")?,
            city_state: fields.required_text("cityState")?,
            cdl_class: fields.required_text("cdlClass")?.parse()?,
            experience: fields.required_text("experience")?.parse()?,
            currently_employed: fields.required_text("currentlyEmployed")?.parse()?,
            sms_consent: fields.has_consent(),
            submitted_at: ctx.submitted_at_text(),
            meta: ctx.meta,
        })
    }

    fn log_received(&self) {
        info!(
            applicant = %self.full_name,
            location = %self.city_state,
            cdl_class = %self.cdl_class,
            experience = %self.experience,
            currently_employed = %self.currently_employed,
            ip_address = %self.meta.ip_address,
            "driver application received"
        );
    }

    fn echo(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("fullName".into(), self.full_name.clone().into());
        data.insert("submittedAt".into(), self.submitted_at.clone().into());
        data
    }
}
