//! Error types for the dashboard crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to start the server.
    #[error("failed to start dashboard: {0}")]
    StartupFailed(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::StartupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<fileflow_table::TableError> for DashboardError {
    fn from(err: fileflow_table::TableError) -> Self {
        DashboardError::StartupFailed(format!("invalid table definition: {err}"))
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (DashboardError::NotFound("/x".into()), StatusCode::NOT_FOUND),
            (DashboardError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (DashboardError::StartupFailed("port".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn table_error_is_a_startup_failure() {
        let err: DashboardError = fileflow_table::TableError::DuplicateColumn("name".into()).into();
        assert!(matches!(err, DashboardError::StartupFailed(_)));
    }
}
