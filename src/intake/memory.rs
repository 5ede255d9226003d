//! In-process submission store for unit testing.
//!
//! Keeps records in insertion order and can be told to fail, so handlers
//! can be exercised without a running database.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;

use super::models::{AppointmentRequest, ContactSubmission};
use super::store::{StoredAppointment, StoredContact, SubmissionStore};

/// Memory-backed store. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contacts: Arc<Mutex<Vec<StoredContact>>>,
    appointments: Arc<Mutex<Vec<StoredAppointment>>>,
    unavailable: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Whether `shutdown` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of stored contact documents.
    pub fn contact_count(&self) -> usize {
        self.contacts.lock().map(|c| c.len()).unwrap_or_default()
    }

    /// Number of stored appointment documents.
    pub fn appointment_count(&self) -> usize {
        self.appointments.lock().map(|a| a.len()).unwrap_or_default()
    }

    /// Insert a raw contact document, bypassing record conversion.
    pub fn insert_raw_contact(&self, doc: StoredContact) {
        if let Ok(mut contacts) = self.contacts.lock() {
            contacts.push(doc);
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store switched off".to_string()))
        } else {
            Ok(())
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert_contact(&self, contact: &ContactSubmission) -> Result<(), StoreError> {
        self.check_available()?;
        self.contacts
            .lock()
            .map_err(poisoned)?
            .push(StoredContact::from(contact));
        Ok(())
    }

    async fn list_contacts(&self, limit: usize) -> Result<Vec<ContactSubmission>, StoreError> {
        self.check_available()?;
        let docs: Vec<StoredContact> = self
            .contacts
            .lock()
            .map_err(poisoned)?
            .iter()
            .take(limit)
            .cloned()
            .collect();
        docs.into_iter().map(ContactSubmission::try_from).collect()
    }

    async fn insert_appointment(
        &self,
        appointment: &AppointmentRequest,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        self.appointments
            .lock()
            .map_err(poisoned)?
            .push(StoredAppointment::from(appointment));
        Ok(())
    }

    async fn list_appointments(
        &self,
        limit: usize,
    ) -> Result<Vec<AppointmentRequest>, StoreError> {
        self.check_available()?;
        let docs: Vec<StoredAppointment> = self
            .appointments
            .lock()
            .map_err(poisoned)?
            .iter()
            .take(limit)
            .cloned()
            .collect();
        docs.into_iter().map(AppointmentRequest::try_from).collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::models::{ContactSubmissionCreate, NewContact};

    fn new_contact() -> NewContact {
        ContactSubmissionCreate {
            name: Some("Mem".to_string()),
            email: Some("mem@example.com".to_string()),
            message: Some("hello".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn preserves_insertion_order_and_limit() {
        let store = MemoryStore::new();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let record = ContactSubmission::create(new_contact());
            ids.push(record.id.clone());
            store.insert_contact(&record).await.unwrap();
        }

        let listed = store.list_contacts(3).await.unwrap();
        let listed_ids: Vec<_> = listed.into_iter().map(|c| c.id).collect();
        assert_eq!(listed_ids, ids[..3].to_vec());
    }

    #[tokio::test]
    async fn corrupt_timestamp_fails_listing() {
        let store = MemoryStore::new();
        let mut doc = StoredContact::from(&ContactSubmission::create(new_contact()));
        doc.created_at = "not a timestamp".to_string();
        store.insert_raw_contact(doc);

        let err = store.list_contacts(10).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        let record = ContactSubmission::create(new_contact());
        assert!(store.insert_contact(&record).await.is_err());
        assert!(store.list_contacts(10).await.is_err());
        assert!(store.ping().await.is_err());
        assert_eq!(store.contact_count(), 0);

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
