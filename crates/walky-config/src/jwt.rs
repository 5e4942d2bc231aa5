use std::env;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET is not set, using the development default");
            DEFAULT_SECRET.to_string()
        });

        Self {
            secret,
            access_token_expiry: lookup("JWT_ACCESS_EXPIRY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
