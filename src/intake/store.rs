//! Persistence seam for submitted records.
//!
//! Records are written as flat documents whose `created_at` is RFC 3339
//! text rather than a native date, so any store only needs to round-trip
//! strings. [`StoredContact`] and [`StoredAppointment`] are that layout.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::models::{AppointmentRequest, ContactSubmission};

/// Collection holding contact messages.
pub const CONTACTS_COLLECTION: &str = "contacts";
/// Collection holding appointment requests.
pub const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Document store for submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a contact message.
    async fn insert_contact(&self, contact: &ContactSubmission) -> Result<(), StoreError>;

    /// Up to `limit` contact messages in the store's natural order.
    async fn list_contacts(&self, limit: usize) -> Result<Vec<ContactSubmission>, StoreError>;

    /// Persist an appointment request.
    async fn insert_appointment(&self, appointment: &AppointmentRequest)
        -> Result<(), StoreError>;

    /// Up to `limit` appointment requests in the store's natural order.
    async fn list_appointments(&self, limit: usize)
        -> Result<Vec<AppointmentRequest>, StoreError>;

    /// Check the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release the connection. Called once at process shutdown.
    async fn shutdown(&self);
}

/// Contact message as laid out in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// Appointment request as laid out in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAppointment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

fn parse_timestamp(id: &str, raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidDocument(format!("record {id}: created_at {raw:?}: {e}")))
}

impl From<&ContactSubmission> for StoredContact {
    fn from(c: &ContactSubmission) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            services: c.services.clone(),
            reason: c.reason.clone(),
            message: c.message.clone(),
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<StoredContact> for ContactSubmission {
    type Error = StoreError;

    fn try_from(doc: StoredContact) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp(&doc.id, &doc.created_at)?;
        Ok(Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            services: doc.services,
            reason: doc.reason,
            message: doc.message,
            created_at,
        })
    }
}

impl From<&AppointmentRequest> for StoredAppointment {
    fn from(a: &AppointmentRequest) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
            phone: a.phone.clone(),
            date: a.date.clone(),
            time: a.time.clone(),
            services: a.services.clone(),
            reason: a.reason.clone(),
            message: a.message.clone(),
            status: a.status.clone(),
            created_at: a.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<StoredAppointment> for AppointmentRequest {
    type Error = StoreError;

    fn try_from(doc: StoredAppointment) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp(&doc.id, &doc.created_at)?;
        Ok(Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            date: doc.date,
            time: doc.time,
            services: doc.services,
            reason: doc.reason,
            message: doc.message,
            status: doc.status,
            created_at,
        })
    }
}
