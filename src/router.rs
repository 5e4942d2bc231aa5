use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::require_auth;
use crate::modules::auth::{init_auth_router, init_login_router};
use crate::modules::navigation::init_navigation_router;
use crate::modules::pages::init_pages_router;
use crate::modules::permissions::init_permissions_router;
use crate::modules::roles::init_roles_router;
use crate::modules::routes::init_routes_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", init_auth_router())
        .nest("/permissions", init_permissions_router(state.clone()))
        .nest("/roles", init_roles_router())
        .nest("/routes", init_routes_router())
        .nest("/navigation", init_navigation_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .nest("/app", init_pages_router(state.clone()))
        .merge(init_login_router(state.clone()))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
