//! Submission records and the request payloads they are created from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::FieldError;

use super::validation::{optional_text, require_email, require_text};

/// Status given to every new appointment request.
pub const DEFAULT_APPOINTMENT_STATUS: &str = "pending";

/// A stored contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A stored appointment request.
///
/// `status` is an open label; nothing in this service moves it past
/// [`DEFAULT_APPOINTMENT_STATUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form body as posted by the site.
///
/// Every field is optional at the decoding stage so that missing values
/// are reported per field by [`ContactSubmissionCreate::validate`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactSubmissionCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

/// Appointment form body as posted by the site.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AppointmentRequestCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Requested calendar date, e.g. `2025-06-02`.
    pub date: Option<String>,
    /// Requested slot label, e.g. `10:00 AM`.
    pub time: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

/// Validated contact message, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: String,
}

/// Validated appointment request, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactSubmissionCreate {
    /// Check required fields and email syntax, collecting every failure.
    pub fn validate(self) -> Result<NewContact, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_text("name", self.name, &mut errors);
        let email = require_email("email", self.email, &mut errors);
        let message = require_text("message", self.message, &mut errors);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(NewContact {
                name,
                email,
                phone: optional_text(self.phone),
                services: self.services,
                reason: optional_text(self.reason),
                message,
            }),
            _ => Err(errors),
        }
    }
}

impl AppointmentRequestCreate {
    /// Check required fields and email syntax, collecting every failure.
    pub fn validate(self) -> Result<NewAppointment, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_text("name", self.name, &mut errors);
        let email = require_email("email", self.email, &mut errors);
        let date = require_text("date", self.date, &mut errors);
        let time = require_text("time", self.time, &mut errors);

        match (name, email, date, time) {
            (Some(name), Some(email), Some(date), Some(time)) if errors.is_empty() => {
                Ok(NewAppointment {
                    name,
                    email,
                    phone: optional_text(self.phone),
                    date,
                    time,
                    services: self.services,
                    reason: optional_text(self.reason),
                    message: optional_text(self.message),
                })
            }
            _ => Err(errors),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl ContactSubmission {
    /// Assign an identifier and creation time.
    pub fn create(new: NewContact) -> Self {
        Self::create_at(new, Utc::now())
    }

    pub(crate) fn create_at(new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            services: new.services,
            reason: new.reason,
            message: new.message,
            created_at,
        }
    }
}

impl AppointmentRequest {
    /// Assign an identifier, creation time and the initial status.
    pub fn create(new: NewAppointment) -> Self {
        Self::create_at(new, Utc::now())
    }

    pub(crate) fn create_at(new: NewAppointment, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            date: new.date,
            time: new.time,
            services: new.services,
            reason: new.reason,
            message: new.message,
            status: DEFAULT_APPOINTMENT_STATUS.to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact_body() -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: Some("Test User".to_string()),
            email: Some("test@example.com".to_string()),
            phone: Some("+1234567890".to_string()),
            services: vec!["AI Agent Building".to_string()],
            reason: Some("New Project Inquiry".to_string()),
            message: Some("Hello there".to_string()),
        }
    }

    #[test]
    fn valid_contact_passes() {
        let new = contact_body().validate().unwrap();
        assert_eq!(new.name, "Test User");
        assert_eq!(new.email, "test@example.com");
        assert_eq!(new.services, vec!["AI Agent Building".to_string()]);
    }

    #[test]
    fn contact_reports_every_failing_field() {
        let body = ContactSubmissionCreate {
            name: None,
            email: Some("not-an-email".to_string()),
            message: Some("   ".to_string()),
            ..Default::default()
        };

        let errors = body.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let body = ContactSubmissionCreate {
            phone: Some(String::new()),
            reason: Some("  ".to_string()),
            ..contact_body()
        };

        let new = body.validate().unwrap();
        assert_eq!(new.phone, None);
        assert_eq!(new.reason, None);
    }

    #[test]
    fn appointment_requires_date_and_time() {
        let body = AppointmentRequestCreate {
            name: Some("A".to_string()),
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };

        let errors = body.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["date", "time"]);
    }

    #[test]
    fn appointment_starts_pending() {
        let body = AppointmentRequestCreate {
            name: Some("A".to_string()),
            email: Some("a@example.com".to_string()),
            date: Some("2025-06-02".to_string()),
            time: Some("10:00 AM".to_string()),
            ..Default::default()
        };

        let record = AppointmentRequest::create(body.validate().unwrap());
        assert_eq!(record.status, DEFAULT_APPOINTMENT_STATUS);
        assert_eq!(record.date, "2025-06-02");
        assert_eq!(record.message, None);
    }

    #[test]
    fn identical_submissions_get_distinct_ids() {
        let first = ContactSubmission::create(contact_body().validate().unwrap());
        let second = ContactSubmission::create(contact_body().validate().unwrap());

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn services_accepts_null_and_absence() {
        let with_null: ContactSubmissionCreate =
            serde_json::from_str(r#"{"name":"a","services":null}"#).unwrap();
        assert!(with_null.services.is_empty());

        let absent: AppointmentRequestCreate = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert!(absent.services.is_empty());
    }
}
