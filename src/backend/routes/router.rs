/**
 * Router Configuration
 *
 * Combines the API routes with the root liveness route, the fallback, and
 * the CORS and tracing layers.
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::Json,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::content::root;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(root));

    let router = configure_api_routes(router, &app_state);

    let router = router.fallback(|| async {
        (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not Found")))
    });

    router
        .layer(cors_layer(&app_state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS for the single configured client origin, with credentials
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match HeaderValue::from_str(&config.client_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::error!("Invalid CLIENT_ORIGIN {:?}: {}", config.client_origin, e);
            layer
        }
    }
}
