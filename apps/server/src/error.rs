//! Error types for the drug inventory server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::models::iso_timestamp;

pub type Result<T> = std::result::Result<T, Error>;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Every rejected field of a request, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationIssues(pub Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|issue| issue.field.as_str()).collect()
    }
}

impl std::fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid query parameters: {0}")]
    Validation(ValidationIssues),

    #[error("Route {0} not found")]
    RouteNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Duplicate drug code: {0}")]
    DuplicateCode(String),

    #[error("Invalid drug record: {0}")]
    InvalidRecord(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_)
            | Error::Migration(_)
            | Error::DuplicateCode(_)
            | Error::InvalidRecord(_)
            | Error::Internal(_)
            | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let timestamp = iso_timestamp(&chrono::Utc::now());

        let body = match &self {
            Error::Validation(issues) => json!({
                "error": "Validation Error",
                "message": "Invalid query parameters",
                "details": issues.0,
                "statusCode": status.as_u16(),
                "timestamp": timestamp,
            }),
            Error::RouteNotFound(_) => json!({
                "error": "Not Found",
                "message": self.to_string(),
                "statusCode": status.as_u16(),
                "timestamp": timestamp,
            }),
            _ => {
                // Store and internal details stay in the logs.
                tracing::error!(error = %self, "Internal error");
                json!({
                    "error": "Internal Server Error",
                    "message": "Internal server error",
                    "statusCode": status.as_u16(),
                    "timestamp": timestamp,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
