//! HTTP API route definitions.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    available_times, blog_posts, case_studies, case_study, create_appointment, health,
    list_appointments, list_contacts, metrics, ready, root, services, submit_contact,
    testimonials, AppState,
};

/// CORS policy for the given allow-list; `None` allows any origin.
pub fn cors_layer(origins: Option<Vec<HeaderValue>>) -> CorsLayer {
    match origins {
        None => CorsLayer::very_permissive(),
        Some(origins) => CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        // API root
        .route("/api", get(root))
        .route("/api/", get(root))
        // Intake
        .route("/api/contact", post(submit_contact))
        .route("/api/contacts", get(list_contacts))
        .route(
            "/api/appointments",
            get(list_appointments).post(create_appointment),
        )
        // Catalog
        .route("/api/testimonials", get(testimonials))
        .route("/api/case-studies", get(case_studies))
        .route("/api/case-studies/:id", get(case_study))
        .route("/api/blog-posts", get(blog_posts))
        .route("/api/services", get(services))
        .route("/api/available-times", get(available_times))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Router with CORS and request tracing applied.
pub fn create_app(state: AppState, origins: Option<Vec<HeaderValue>>) -> Router {
    create_router(state)
        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::intake::{IntakeService, MemoryStore};

    fn state_with(store: MemoryStore) -> AppState {
        AppState::new(Catalog::seeded(), IntakeService::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(state_with(MemoryStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_endpoint_returns_503_when_store_down() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        let app = create_router(state_with(store));

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn ready_endpoint_returns_200_when_store_answers() {
        let app = create_router(state_with(MemoryStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_root_answers_with_and_without_slash() {
        for uri in ["/api", "/api/"] {
            let app = create_router(state_with(MemoryStore::new()));
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = create_router(state_with(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wildcard_cors_echoes_origin() {
        let app = create_app(state_with(MemoryStore::new()), None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/services")
                    .header(header::ORIGIN, "https://anywhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://anywhere.example"
        );
    }

    #[tokio::test]
    async fn allow_list_cors_rejects_unknown_origin() {
        let origins = vec![HeaderValue::from_static("https://lumis.dev")];
        let app = create_app(state_with(MemoryStore::new()), Some(origins));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contact")
                    .header(header::ORIGIN, "https://evil.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
