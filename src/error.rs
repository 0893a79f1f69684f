use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unknown month: {0}")]
    UnknownMonth(String),

    /// Neither an explicit irradiance nor a full city/month selection.
    #[error("solar irradiance unavailable: give solar_irradiance or both city and month")]
    MissingIrradiance,

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownCity(_) | AppError::UnknownMonth(_) => StatusCode::BAD_REQUEST,
            AppError::MissingIrradiance => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigIo { .. } | AppError::ConfigParse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_errors_are_client_errors() {
        assert_eq!(AppError::UnknownCity("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UnknownMonth("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingIrradiance.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn message_names_the_offending_value() {
        assert_eq!(AppError::UnknownCity("Paris".into()).to_string(), "unknown city: Paris");
    }
}
