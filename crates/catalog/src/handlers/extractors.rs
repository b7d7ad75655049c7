//! Request body extractor for JSON payloads.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

use super::ApiError;

/// A JSON request body.
///
/// Unlike [`axum::Json`], a request without a `Content-Type` header is
/// still read as JSON, and every body failure (bad syntax, missing or
/// invalid fields, non-JSON content type) is reported as an
/// [`ApiError`], which renders it as 422.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

/// Returns false only when a content type is present and is not JSON.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return true;
    };

    content_type
        .to_str()
        .ok()
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json(req.headers()) {
            return Err(ApiError::UnsupportedContentType);
        }

        let bytes = Bytes::from_request(req, state).await?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn test_accepts_json_content_types() {
        assert!(accepts_json(&headers(None)));
        assert!(accepts_json(&headers(Some("application/json"))));
        assert!(accepts_json(&headers(Some("application/json; charset=utf-8"))));
        assert!(accepts_json(&headers(Some("application/merge-patch+json"))));
    }

    #[test]
    fn test_rejects_other_content_types() {
        assert!(!accepts_json(&headers(Some("text/plain"))));
        assert!(!accepts_json(&headers(Some(
            "application/x-www-form-urlencoded"
        ))));
    }
}
