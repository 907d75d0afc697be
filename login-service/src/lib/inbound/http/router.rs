use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_secure_word::get_secure_word;
use super::handlers::login::login;
use super::handlers::verify_mfa::verify_mfa;
use crate::domain::login::service::LoginService;
use crate::outbound::stores::attempts::InMemoryMfaAttemptTracker;
use crate::outbound::stores::secure_word::InMemorySecureWordStore;
use crate::outbound::stores::users::InMemoryUserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub login_service:
        Arc<LoginService<InMemoryUserDirectory, InMemorySecureWordStore, InMemoryMfaAttemptTracker>>,
}

pub fn create_router(
    login_service: Arc<
        LoginService<InMemoryUserDirectory, InMemorySecureWordStore, InMemoryMfaAttemptTracker>,
    >,
) -> Router {
    let state = AppState { login_service };

    let api_routes = Router::new()
        .route("/api/getSecureWord", post(get_secure_word))
        .route("/api/login", post(login))
        .route("/api/verifyMfa", post(verify_mfa));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
