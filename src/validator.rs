//! JSON body extractor that runs `validator` rules after deserializing.
//!
//! Body problems (wrong content type, malformed JSON, unknown or mistyped
//! fields) answer `400`; a body that parses but breaks a validation rule
//! answers `422`. Request types are expected to deny unknown fields so a
//! misspelt key is reported instead of read as absent.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use walky_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn backticked_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.split(marker).nth(1)?.split('`').next()
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON body".to_string(),
        JsonRejection::JsonDataError(_) => {
            let text = rejection.body_text();
            match backticked_after(&text, "unknown field `") {
                Some(field) => format!("Unknown field `{}`", field),
                None => "Invalid field type in request".to_string(),
            }
        }
        _ => "Invalid request body".to_string(),
    };

    AppError::bad_request(anyhow!(message))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{StatusCode, header},
    };
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    struct Rename {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Rename, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/rename");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        ValidatedJson::<Rename>::from_request(request, &())
            .await
            .map(|ValidatedJson(value)| value)
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let value = extract(Some("application/json"), r#"{"name":"Events"}"#)
            .await
            .unwrap();
        assert_eq!(value.name, "Events");
    }

    #[tokio::test]
    async fn test_rule_violation_is_unprocessable() {
        let err = extract(Some("application/json"), r#"{"name":""}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error.to_string(), "name must not be empty");
    }

    #[tokio::test]
    async fn test_unknown_field_is_named() {
        let err = extract(Some("application/json"), r#"{"nmae":"Events"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Unknown field `nmae`");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = extract(Some("application/json"), r#"{"name":"#)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Malformed JSON body");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let err = extract(None, r#"{"name":"Events"}"#).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.error.to_string(),
            "Missing 'Content-Type: application/json' header"
        );
    }
}
