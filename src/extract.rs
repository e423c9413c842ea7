use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// `Json` body extractor whose rejections use the `ApiResponse` error envelope.
///
/// Malformed or incomplete bodies become `AppError::Validation` (422).
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "request body rejected");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};

    use crate::dto::tables::OpenTableRequest;

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/tables/open")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error() {
        let result = ValidJson::<OpenTableRequest>::from_request(
            json_request(r#"{"covers": 2}"#),
            &(),
        )
        .await;

        match result {
            Err(AppError::Validation(message)) => assert!(message.contains("table_id")),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("body without table_id was accepted"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let result =
            ValidJson::<OpenTableRequest>::from_request(json_request("{not json"), &()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let result = ValidJson::<OpenTableRequest>::from_request(
            json_request(r#"{"table_id": "6f1c2a4e-7d0b-4f43-9a51-2b8e5c1d9e00", "covers": 4}"#),
            &(),
        )
        .await;

        let ValidJson(payload) = result.expect("valid body");
        assert_eq!(payload.covers, 4);
    }
}
