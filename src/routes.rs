//! Application composer
//!
//! Builds the router exactly once at process entry: cross-origin policy,
//! the welcome endpoint, the OpenAPI surface, and the five feature routers
//! in their fixed mount order.

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::routers;
use crate::state::AppState;

/// Machine-readable API description path
pub const OPENAPI_PATH: &str = "/api/v1/openapi.json";

/// Origins that are always allowed, ahead of any configured ones, so local
/// frontends work without extra configuration.
pub const DEV_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:8000",
    "http://127.0.0.1:3000",
    "http://localhost:8000",
    "http://localhost:3000",
];

/// OpenAPI documentation for the Brave Date server.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brave Date Server",
        version = "0.1.0",
        description = "The server side of Brave Date."
    ),
    paths(root),
    components(schemas(WelcomeResponse)),
    tags(
        (name = "auth", description = "Signup, login, and token handling"),
        (name = "users", description = "User profile operations"),
        (name = "matches", description = "Match listing and swipes"),
        (name = "messages", description = "Conversation history"),
        (name = "websockets", description = "Real-time messaging"),
    )
)]
struct ApiDoc;

/// Welcome response body
#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Welcome endpoint; also serves as an unauthenticated liveness probe.
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Brave Date Server.".to_string(),
    })
}

/// The full allowed-origins list: the development origins first, then the
/// configured production origins in their given order. No de-duplication.
pub fn allowed_origins(configured: &[String]) -> Vec<String> {
    DEV_ORIGINS
        .iter()
        .map(|origin| origin.to_string())
        .chain(configured.iter().cloned())
        .collect()
}

/// Cross-origin policy: the computed origin list, credentials allowed, and
/// request methods/headers mirrored back. tower-http rejects the `Any`
/// wildcard once credentials are allowed; mirroring is the credential-safe
/// way to accept every method and header.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring origin that is not a valid header value");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the main application router.
///
/// Called once from `main`; axum panics on duplicate route paths, so a
/// successfully built router carries each route exactly once.
pub fn create_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();
    let cors = cors_layer(&allowed_origins(&state.config.cors_origins));

    Router::new()
        // Welcome / health endpoint
        .route("/api", get(root))
        // Feature routers, fixed mount order
        .merge(routers::auth::router())
        .merge(routers::users::router())
        .merge(routers::matches::router())
        .merge(routers::messages::router())
        .merge(routers::websockets::router())
        // Interactive docs at /docs, API description at its fixed path
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, openapi.clone()))
        // Alternate docs UI
        .merge(Redoc::with_url("/redocs", openapi))
        .with_state(state)
        // Layers wrap every route above, docs and welcome included
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
