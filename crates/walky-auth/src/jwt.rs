//! Token creation and verification.
//!
//! Access tokens name the administrator's role; the permission evaluators
//! work from that role alone, so no lookup is needed per request.
//!
//! # Example
//!
//! ```ignore
//! use walky_auth::{create_access_token, verify_token};
//! use walky_config::JwtConfig;
//! use walky_permissions::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "admin@campus.edu", Role::CampusAdmin, None, None, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use walky_config::JwtConfig;
use walky_core::AppError;
use walky_permissions::Role;

use crate::claims::Claims;

/// Creates an access token for `role`, scoped to an optional school and campus.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    school_id: Option<Uuid>,
    campus_id: Option<Uuid>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.as_str().to_string(),
        school_id,
        campus_id,
        exp,
        iat: now,
    };

    encode_claims(&claims, jwt_config)
}

/// Encode arbitrary access claims. Used where the role string must be written
/// verbatim, such as tokens minted by an upstream issuer in tests.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token's signature and expiry and returns its claims.
///
/// The role is not parsed here; see [`Claims::role`].
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, expired, or
/// signed with a different secret.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();
        let school_id = Uuid::new_v4();

        let token = create_access_token(
            user_id,
            "admin@campus.edu",
            Role::SchoolAdmin,
            Some(school_id),
            None,
            &config,
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "admin@campus.edu");
        assert_eq!(claims.role, "school_admin");
        assert_eq!(claims.role(), Ok(Role::SchoolAdmin));
        assert_eq!(claims.school_id, Some(school_id));
        assert_eq!(claims.campus_id, None);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        assert!(verify_token("invalid-token", &config).is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(
            Uuid::new_v4(),
            "admin@campus.edu",
            Role::Moderator,
            None,
            None,
            &config,
        )
        .unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "old@campus.edu".to_string(),
            role: "moderator".to_string(),
            school_id: None,
            campus_id: None,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode_claims(&claims, &config).unwrap();

        let error = verify_token(&token, &config).unwrap_err();
        assert_eq!(error.status.as_u16(), 401);
    }

    #[test]
    fn test_unknown_role_survives_decoding() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "ghost@campus.edu".to_string(),
            role: "nonexistent_role".to_string(),
            school_id: None,
            campus_id: None,
            exp: now + 600,
            iat: now,
        };
        let token = encode_claims(&claims, &config).unwrap();

        let decoded = verify_token(&token, &config).unwrap();
        assert_eq!(decoded.role, "nonexistent_role");
        assert!(decoded.role().is_err());
    }
}
