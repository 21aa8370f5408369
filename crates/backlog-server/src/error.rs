use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use backlog_core::BacklogError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BacklogError::InvalidProject(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<BacklogError>() {
            match e {
                BacklogError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
                BacklogError::EmptySummary | BacklogError::InvalidProject(_) => {
                    StatusCode::BAD_REQUEST
                }
                BacklogError::Db(_) | BacklogError::Json(_) | BacklogError::Io(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_not_found_maps_to_404() {
        let err = AppError(BacklogError::ProjectNotFound(7).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_project_maps_to_400() {
        let err = AppError(BacklogError::InvalidProject("name is empty".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_summary_maps_to_400() {
        let err = AppError(BacklogError::EmptySummary.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(BacklogError::Io(io_err).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_domain_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_constructor_maps_to_400() {
        let err = AppError::bad_request("summary is empty");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn response_body_is_json_with_error_field() {
        let err = AppError(BacklogError::ProjectNotFound(1).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
