//! Validated body extractor - Combines deserialization with validation.

use std::collections::BTreeSet;

use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Body extractor that accepts JSON or URL-encoded form data and validates
/// the payload before the handler runs.
///
/// Bodies declared as `application/x-www-form-urlencoded` are read as form
/// data; everything else is read as JSON. Unreadable bodies and failed
/// validation both reject with [`AppError::Validation`].
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use user_records::api::extractors::ValidatedBody;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUserRequest {
///     #[validate(length(min = 1))]
///     id: String,
/// }
///
/// async fn create_user(ValidatedBody(payload): ValidatedBody<CreateUserRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            value
        };

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedBody(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Format validation errors into a user-friendly string
///
/// Messages are deduplicated and sorted so the output does not depend on
/// field iteration order.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "id required"))]
        id: String,
    }

    async fn extract(content_type: &str, body: &'static str) -> Result<Payload, AppError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();

        ValidatedBody::<Payload>::from_request(req, &())
            .await
            .map(|ValidatedBody(p)| p)
    }

    #[tokio::test]
    async fn test_reads_json() {
        let payload = extract("application/json", r#"{"id":"u1"}"#).await.unwrap();
        assert_eq!(payload.id, "u1");
    }

    #[tokio::test]
    async fn test_reads_form() {
        let payload = extract("application/x-www-form-urlencoded", "id=u1").await.unwrap();
        assert_eq!(payload.id, "u1");
    }

    #[tokio::test]
    async fn test_validation_message() {
        let err = extract("application/json", r#"{"id":""}"#).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "id required"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let err = extract("application/json", "{not json").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
