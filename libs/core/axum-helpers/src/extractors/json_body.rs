//! JSON extractor that reads the raw body text before parsing.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that does not require a `Content-Type` header.
///
/// The body is read to text first. An empty (or whitespace-only) body is
/// rejected with `EMPTY_BODY`, unparseable JSON with `INVALID_JSON`; both
/// are `400 Bad Request` and the handler is never invoked.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::delete};
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Lookup {
///     articlenumber: uuid::Uuid,
/// }
///
/// async fn remove(JsonBody(lookup): JsonBody<Lookup>) -> String {
///     lookup.articlenumber.to_string()
/// }
///
/// let app: Router = Router::new().route("/", delete(remove));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let text = String::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        if text.trim().is_empty() {
            return Err(AppError::EmptyBody.into_response());
        }

        let data = serde_json::from_str(&text).map_err(|e| AppError::from(e).into_response())?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{self, StatusCode},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|JsonBody(payload): JsonBody<Payload>| async move { payload.name }),
        )
    }

    fn post_body(body: &'static str) -> http::Request<Body> {
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_json_without_content_type() {
        let response = app().oneshot(post_body(r#"{"name":"lamp"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_empty_body() {
        let response = app().oneshot(post_body("  \n")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_invalid_json() {
        let response = app().oneshot(post_body("{name:")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let response = app().oneshot(post_body("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
