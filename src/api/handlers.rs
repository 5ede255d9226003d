//! HTTP API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

use crate::catalog::{AvailableTimes, BlogPost, Catalog, CaseStudy, Service, Testimonial};
use crate::error::{ApiError, Result};
use crate::intake::{
    AppointmentRequest, AppointmentRequestCreate, ContactSubmission, ContactSubmissionCreate,
    IntakeService,
};

/// Greeting returned from the API root.
pub const ROOT_MESSAGE: &str = "Lumis API - Illuminating the Future of IT";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Site content, built once at startup.
    pub catalog: Arc<Catalog>,
    /// Submission intake over the document store.
    pub intake: IntakeService,
    /// Prometheus scrape handle, if a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state.
    pub fn new(catalog: Catalog, intake: IntakeService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            intake,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle served at `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Root response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether the document store answered.
    pub ready: bool,
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "unreadable request body");
        ApiError::MalformedBody(rejection.body_text())
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check handler - returns 200 if the store answers, 503 otherwise.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.intake.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadyResponse { ready: true })),
        Err(e) => {
            warn!(error = %e, "store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse { ready: false }),
            )
        }
    }
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// API root - liveness/info message.
#[utoipa::path(get, path = "/api/", tag = "info",
    responses((status = 200, body = MessageResponse)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Store a contact-form message.
#[utoipa::path(post, path = "/api/contact", tag = "intake",
    request_body = ContactSubmissionCreate,
    responses(
        (status = 200, body = ContactSubmission),
        (status = 422, description = "Missing field or invalid email"),
        (status = 500, description = "Store failure"),
    ))]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactSubmissionCreate>, JsonRejection>,
) -> Result<Json<ContactSubmission>> {
    let contact = state.intake.submit_contact(body(payload)?).await?;
    Ok(Json(contact))
}

/// List stored contact messages, at most 100.
#[utoipa::path(get, path = "/api/contacts", tag = "intake",
    responses((status = 200, body = [ContactSubmission])))]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<ContactSubmission>>> {
    Ok(Json(state.intake.list_contacts().await?))
}

/// Store an appointment request.
#[utoipa::path(post, path = "/api/appointments", tag = "intake",
    request_body = AppointmentRequestCreate,
    responses(
        (status = 200, body = AppointmentRequest),
        (status = 422, description = "Missing field or invalid email"),
        (status = 500, description = "Store failure"),
    ))]
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AppointmentRequestCreate>, JsonRejection>,
) -> Result<Json<AppointmentRequest>> {
    let appointment = state.intake.submit_appointment(body(payload)?).await?;
    Ok(Json(appointment))
}

/// List stored appointment requests, at most 100.
#[utoipa::path(get, path = "/api/appointments", tag = "intake",
    responses((status = 200, body = [AppointmentRequest])))]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentRequest>>> {
    Ok(Json(state.intake.list_appointments().await?))
}

#[utoipa::path(get, path = "/api/testimonials", tag = "catalog",
    responses((status = 200, body = [Testimonial])))]
pub async fn testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.catalog.testimonials().to_vec())
}

#[utoipa::path(get, path = "/api/case-studies", tag = "catalog",
    responses((status = 200, body = [CaseStudy])))]
pub async fn case_studies(State(state): State<AppState>) -> Json<Vec<CaseStudy>> {
    Json(state.catalog.case_studies().to_vec())
}

/// Single case study by exact id.
#[utoipa::path(get, path = "/api/case-studies/{id}", tag = "catalog",
    params(("id" = String, Path, description = "Case study id, e.g. cs1")),
    responses(
        (status = 200, body = CaseStudy),
        (status = 404, description = "Case study not found"),
    ))]
pub async fn case_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseStudy>> {
    Ok(Json(state.catalog.case_study(&id)?.clone()))
}

#[utoipa::path(get, path = "/api/blog-posts", tag = "catalog",
    responses((status = 200, body = [BlogPost])))]
pub async fn blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.catalog.blog_posts().to_vec())
}

#[utoipa::path(get, path = "/api/services", tag = "catalog",
    responses((status = 200, body = [Service])))]
pub async fn services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.catalog.services().to_vec())
}

/// Fixed appointment slot labels.
#[utoipa::path(get, path = "/api/available-times", tag = "catalog",
    responses((status = 200, body = AvailableTimes)))]
pub async fn available_times(State(state): State<AppState>) -> Json<AvailableTimes> {
    Json(state.catalog.available_times().clone())
}
