//! MongoDB-backed submission store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::metrics;

use super::models::{AppointmentRequest, ContactSubmission};
use super::store::{
    StoredAppointment, StoredContact, SubmissionStore, APPOINTMENTS_COLLECTION,
    CONTACTS_COLLECTION,
};

/// Submission store over a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    contacts: Collection<StoredContact>,
    appointments: Collection<StoredAppointment>,
}

impl MongoStore {
    /// Build a client for `mongo_url` and bind the submission collections.
    ///
    /// The driver connects lazily; use [`SubmissionStore::ping`] to check
    /// reachability.
    pub async fn connect(mongo_url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(mongo_url).await?;
        let database = client.database(db_name);
        info!(database = %db_name, "MongoDB client created");

        Ok(Self {
            contacts: database.collection(CONTACTS_COLLECTION),
            appointments: database.collection(APPOINTMENTS_COLLECTION),
            client,
            database,
        })
    }
}

fn without_internal_id() -> Document {
    doc! { "_id": 0 }
}

async fn insert<T>(collection: &Collection<T>, document: &T) -> Result<(), StoreError>
where
    T: Serialize + Send + Sync,
{
    let start = Instant::now();
    let result = collection.insert_one(document).await;
    metrics::record_store_latency(start, "insert");

    result.map_err(|e| {
        metrics::inc_store_errors("insert");
        StoreError::from(e)
    })?;
    Ok(())
}

async fn find_capped<T>(collection: &Collection<T>, limit: usize) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Send + Sync,
{
    let start = Instant::now();
    let result: mongodb::error::Result<Vec<T>> = async {
        let cursor = collection
            .find(doc! {})
            .projection(without_internal_id())
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;
        cursor.try_collect::<Vec<T>>().await
    }
    .await;
    metrics::record_store_latency(start, "find");

    result.map_err(|e| {
        metrics::inc_store_errors("find");
        StoreError::from(e)
    })
}

#[async_trait]
impl SubmissionStore for MongoStore {
    #[instrument(skip(self, contact), fields(id = %contact.id))]
    async fn insert_contact(&self, contact: &ContactSubmission) -> Result<(), StoreError> {
        insert(&self.contacts, &StoredContact::from(contact)).await?;
        debug!("contact stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_contacts(&self, limit: usize) -> Result<Vec<ContactSubmission>, StoreError> {
        find_capped(&self.contacts, limit)
            .await?
            .into_iter()
            .map(ContactSubmission::try_from)
            .collect()
    }

    #[instrument(skip(self, appointment), fields(id = %appointment.id))]
    async fn insert_appointment(
        &self,
        appointment: &AppointmentRequest,
    ) -> Result<(), StoreError> {
        insert(&self.appointments, &StoredAppointment::from(appointment)).await?;
        debug!("appointment stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_appointments(
        &self,
        limit: usize,
    ) -> Result<Vec<AppointmentRequest>, StoreError> {
        find_capped(&self.appointments, limit)
            .await?
            .into_iter()
            .map(AppointmentRequest::try_from)
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}
