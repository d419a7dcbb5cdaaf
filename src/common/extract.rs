// src/common/extract.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
};

use crate::common::error::ApiError;

// Extratores próprios: mesma coisa que Json/Path do axum, mas as rejeições
// viram ApiError (corpo `{message}`) em vez de texto puro.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Sem Content-Type JSON continua 415; corpo malformado ou com tipo errado é 400.
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        let message = rejection.body_text();
        tracing::warn!("Corpo rejeitado: {}", message);
        ApiError::new(status, message)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("Caminho rejeitado: {}", message);
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<AppJson<Named>, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        AppJson::<Named>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn wrong_field_type_is_a_bad_request() {
        let err = extract(Some("application/json"), r#"{"name": 5}"#).await.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(!err.message.is_empty());
    }

    #[tokio::test]
    async fn broken_json_is_a_bad_request() {
        let err = extract(Some("application/json"), "{").await.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_keeps_415() {
        let err = extract(None, "{}").await.err().unwrap();
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
