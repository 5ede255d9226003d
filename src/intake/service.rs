//! Intake operations: validate, stamp, store, read back.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{ApiError, FieldError, Result};
use crate::metrics;

use super::models::{
    AppointmentRequest, AppointmentRequestCreate, ContactSubmission, ContactSubmissionCreate,
};
use super::store::SubmissionStore;

/// Most records a listing ever returns.
pub const MAX_LIST_RESULTS: usize = 100;

/// Accepts and reads back contact messages and appointment requests.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn SubmissionStore>,
}

impl IntakeService {
    /// Create a service over `store`.
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn SubmissionStore> {
        &self.store
    }

    /// Validate and persist a contact message.
    ///
    /// Nothing is written when validation fails. Identical bodies produce
    /// independent records.
    #[instrument(skip_all)]
    pub async fn submit_contact(
        &self,
        input: ContactSubmissionCreate,
    ) -> Result<ContactSubmission> {
        let new = input.validate().map_err(|fields| {
            warn!(fields = ?field_names(&fields), "contact rejected");
            metrics::inc_submissions_rejected("contact");
            ApiError::Validation(fields)
        })?;

        let contact = ContactSubmission::create(new);
        self.store.insert_contact(&contact).await?;
        metrics::inc_contact_submissions();
        info!(id = %contact.id, "contact message received");

        Ok(contact)
    }

    /// Up to [`MAX_LIST_RESULTS`] contact messages.
    #[instrument(skip_all)]
    pub async fn list_contacts(&self) -> Result<Vec<ContactSubmission>> {
        let mut contacts = self.store.list_contacts(MAX_LIST_RESULTS).await?;
        contacts.truncate(MAX_LIST_RESULTS);
        Ok(contacts)
    }

    /// Validate and persist an appointment request with status `pending`.
    ///
    /// The requested slot is not checked against the available times and
    /// overlapping requests are accepted.
    #[instrument(skip_all)]
    pub async fn submit_appointment(
        &self,
        input: AppointmentRequestCreate,
    ) -> Result<AppointmentRequest> {
        let new = input.validate().map_err(|fields| {
            warn!(fields = ?field_names(&fields), "appointment rejected");
            metrics::inc_submissions_rejected("appointment");
            ApiError::Validation(fields)
        })?;

        let appointment = AppointmentRequest::create(new);
        self.store.insert_appointment(&appointment).await?;
        metrics::inc_appointment_requests();
        info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment requested"
        );

        Ok(appointment)
    }

    /// Up to [`MAX_LIST_RESULTS`] appointment requests.
    #[instrument(skip_all)]
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentRequest>> {
        let mut appointments = self.store.list_appointments(MAX_LIST_RESULTS).await?;
        appointments.truncate(MAX_LIST_RESULTS);
        Ok(appointments)
    }
}

fn field_names(fields: &[FieldError]) -> Vec<&'static str> {
    fields.iter().map(|f| f.field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::memory::MemoryStore;
    use crate::intake::models::DEFAULT_APPOINTMENT_STATUS;

    fn service() -> (IntakeService, MemoryStore) {
        let store = MemoryStore::new();
        (IntakeService::new(Arc::new(store.clone())), store)
    }

    fn contact_body(email: &str) -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: Some("Test User".to_string()),
            email: Some(email.to_string()),
            message: Some("This is a test message.".to_string()),
            ..Default::default()
        }
    }

    fn appointment_body() -> AppointmentRequestCreate {
        AppointmentRequestCreate {
            name: Some("Test Appointment User".to_string()),
            email: Some("appointment@example.com".to_string()),
            date: Some("2025-06-02".to_string()),
            time: Some("10:00 AM".to_string()),
            services: vec!["DevOps & Cloud".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn invalid_email_is_not_persisted() {
        let (service, store) = service();

        let err = service
            .submit_contact(contact_body("not-an-email"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.contact_count(), 0);
    }

    #[tokio::test]
    async fn repeated_submissions_are_independent() {
        let (service, store) = service();

        let first = service.submit_contact(contact_body("a@example.com")).await.unwrap();
        let second = service.submit_contact(contact_body("a@example.com")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.contact_count(), 2);
    }

    #[tokio::test]
    async fn appointment_is_listed_as_pending() {
        let (service, _) = service();

        let created = service.submit_appointment(appointment_body()).await.unwrap();
        let listed = service.list_appointments().await.unwrap();

        let found = listed.iter().find(|a| a.id == created.id).unwrap();
        assert_eq!(found.date, "2025-06-02");
        assert_eq!(found.time, "10:00 AM");
        assert_eq!(found.status, DEFAULT_APPOINTMENT_STATUS);
    }

    #[tokio::test]
    async fn double_booking_is_accepted() {
        let (service, store) = service();

        service.submit_appointment(appointment_body()).await.unwrap();
        service.submit_appointment(appointment_body()).await.unwrap();

        assert_eq!(store.appointment_count(), 2);
    }

    #[tokio::test]
    async fn listing_is_capped() {
        let (service, _) = service();

        for i in 0..(MAX_LIST_RESULTS + 5) {
            service
                .submit_contact(contact_body(&format!("user{i}@example.com")))
                .await
                .unwrap();
        }

        let listed = service.list_contacts().await.unwrap();
        assert_eq!(listed.len(), MAX_LIST_RESULTS);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_store_error() {
        let (service, store) = service();
        store.set_unavailable(true);

        let err = service.submit_appointment(appointment_body()).await.unwrap_err();
        assert!(matches!(err, ApiError::Store(_)));

        let err = service.list_contacts().await.unwrap_err();
        assert!(matches!(err, ApiError::Store(_)));
    }
}
