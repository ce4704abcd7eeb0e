use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LocatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid database URL: {0}")]
    DatabaseUrl(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Invalid latitude or longitude")]
    InvalidCoordinates,

    #[error("Invalid school input")]
    InvalidSchool,

    #[error("Store error while {op}: {source}")]
    Store {
        op: StoreOp,
        #[source]
        source: SqlxError,
    },
}

/// Store operation a failure is attributed to; selects the public message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    ListSchools,
    AddSchool,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::ListSchools => f.write_str("listing schools"),
            StoreOp::AddSchool => f.write_str("adding school"),
        }
    }
}

impl LocatorError {
    /// Attribute a raw database failure to the store operation it interrupted.
    pub fn during(self, op: StoreOp) -> Self {
        match self {
            LocatorError::Database(source) => LocatorError::Store { op, source },
            other => other,
        }
    }
}

impl IntoResponse for LocatorError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            LocatorError::InvalidCoordinates => {
                (StatusCode::BAD_REQUEST, "Invalid latitude or longitude")
            }
            LocatorError::InvalidSchool => (StatusCode::BAD_REQUEST, "Invalid input!"),
            LocatorError::Store {
                op: StoreOp::ListSchools,
                ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve schools!",
            ),
            LocatorError::Store {
                op: StoreOp::AddSchool,
                ..
            }
            | LocatorError::Database(_)
            | LocatorError::Config(_)
            | LocatorError::DatabaseUrl(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error!"),
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body shared by every endpoint: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn during_tags_database_errors_only() {
        let err = LocatorError::Database(SqlxError::PoolClosed).during(StoreOp::ListSchools);
        assert!(matches!(
            err,
            LocatorError::Store {
                op: StoreOp::ListSchools,
                ..
            }
        ));

        let err = LocatorError::InvalidSchool.during(StoreOp::AddSchool);
        assert!(matches!(err, LocatorError::InvalidSchool));
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let resp = LocatorError::InvalidCoordinates.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = LocatorError::Store {
            op: StoreOp::AddSchool,
            source: SqlxError::PoolClosed,
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
