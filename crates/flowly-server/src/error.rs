use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flowly_core::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("visualization '{0}' not found")]
    NotFound(String),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("not logged in")]
    Unauthorized,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::EmptyQuery | CoreError::UnknownChartType(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(CoreError::DuplicateId(_)) => StatusCode::CONFLICT,
            ApiError::Core(CoreError::MissingDataset { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PasswordMismatch => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("rejected request: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
