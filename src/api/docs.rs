//! OpenAPI document for the public API.

use utoipa::OpenApi;

use super::handlers;

/// OpenAPI description of every `/api` route.
#[derive(OpenApi)]
#[openapi(
    info(title = "Lumis API", description = "Contact intake and site content"),
    paths(
        handlers::root,
        handlers::submit_contact,
        handlers::list_contacts,
        handlers::create_appointment,
        handlers::list_appointments,
        handlers::testimonials,
        handlers::case_studies,
        handlers::case_study,
        handlers::blog_posts,
        handlers::services,
        handlers::available_times,
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "intake", description = "Contact messages and appointment requests"),
        (name = "catalog", description = "Fixed site content"),
    )
)]
pub struct ApiDoc;
