//! Intake Service: contact messages and appointment requests.
//!
//! This module handles:
//! - Submission records and request payloads
//! - Field validation
//! - The document store seam and its MongoDB implementation
//! - In-memory store for testing

pub mod memory;
pub mod models;
pub mod mongo;
pub mod service;
pub mod store;
pub mod validation;

pub use memory::MemoryStore;
pub use models::{
    AppointmentRequest, AppointmentRequestCreate, ContactSubmission, ContactSubmissionCreate,
};
pub use mongo::MongoStore;
pub use service::{IntakeService, MAX_LIST_RESULTS};
pub use store::SubmissionStore;
