#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;
use walky_admin::router::init_router;
use walky_admin::state::AppState;
use walky_auth::{Claims, create_access_token, encode_claims};
use walky_config::{AccessConfig, CorsConfig, JwtConfig};
use walky_permissions::{Role, UnmappedRoutePolicy};

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-characters".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(policy: UnmappedRoutePolicy) -> AppState {
    AppState::new(
        jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        AccessConfig {
            unmapped_route_policy: policy,
            ..AccessConfig::default()
        },
    )
    .unwrap()
}

pub fn setup_test_app() -> Router {
    init_router(test_state(UnmappedRoutePolicy::default()))
}

pub fn setup_test_app_with_policy(policy: UnmappedRoutePolicy) -> Router {
    init_router(test_state(policy))
}

pub fn token_for(role: Role) -> String {
    create_access_token(
        Uuid::new_v4(),
        &format!("{}@campus.edu", role.as_str()),
        role,
        Some(Uuid::new_v4()),
        None,
        &jwt_config(),
    )
    .unwrap()
}

/// A correctly signed token carrying an arbitrary role string.
pub fn token_with_raw_role(role: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "ghost@campus.edu".to_string(),
        role: role.to_string(),
        school_id: None,
        campus_id: None,
        exp: now + 600,
        iat: now,
    };
    encode_claims(&claims, &jwt_config()).unwrap()
}

pub fn expired_token(role: Role) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "expired@campus.edu".to_string(),
        role: role.as_str().to_string(),
        school_id: None,
        campus_id: None,
        exp: now - 3600,
        iat: now - 7200,
    };
    encode_claims(&claims, &jwt_config()).unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response body is not JSON: {:?}",
            String::from_utf8_lossy(&body)
        )
    })
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
