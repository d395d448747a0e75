use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tally_core::TallyError;

/// HTTP-facing wrapper around `TallyError`.
///
/// `NotFound` renders as a bare `text/plain` message; everything else as a
/// JSON `{error, message}` body.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TallyError::NotFound(_) => StatusCode::NOT_FOUND,
            TallyError::BadRequest(_) | TallyError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            TallyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            TallyError::NotFound(_) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.0.to_string(),
            )
                .into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "request failed");
                }
                let body = Json(json!({
                    "error": other.client_code().as_str(),
                    "message": other.to_string(),
                }));
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError(TallyError::NotFound("x".into())).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError(TallyError::BadRequest("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError(TallyError::Internal("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_is_plain_text() {
        let resp = ApiError(TallyError::NotFound("ghost".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
