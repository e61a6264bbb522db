use std::path::PathBuf;

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dorm_survey_types::SurveyError;

/// Errors raised while starting or running the survey server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read survey file {}: {source}", .path.display())]
    SurveyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid survey in {}: {source}", .path.display())]
    Survey { path: PathBuf, source: SurveyError },

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Malformed form data: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::Multipart(err) => {
                tracing::debug!(error = %err, "Rejecting malformed multipart body");
                (StatusCode::BAD_REQUEST, format!("Malformed form data: {err}")).into_response()
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
