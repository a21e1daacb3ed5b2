//! Error types for the Hunter.io client.

use crate::store::StoreError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the client, the check service, and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("configuration: HUNTER_API_KEY is not set")]
    MissingApiKey,

    #[error("configuration: invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    // Network errors
    #[error("{operation}: request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: HTTP {status}: {}", .message.as_deref().unwrap_or(.body.as_str()))]
    Status {
        operation: &'static str,
        status: StatusCode,
        /// First `details` entry of the API's error payload, if it sent one.
        message: Option<String>,
        /// Raw response body.
        body: String,
        /// First `id` entry of the API's error payload, e.g. `authentication_failed`.
        error_id: Option<String>,
    },

    // Data format errors
    #[error("{operation}: unexpected response body: {source}")]
    Parse {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // Persistence errors
    #[error("{operation}: storage failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Coarse classification of an [`Error`].
///
/// Both transport failures and non-2xx statuses are request failures; a body
/// that arrived with a success status but could not be decoded is a parse
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Request,
    Parse,
    Storage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey | Self::InvalidConfig { .. } => ErrorKind::Config,
            Self::Request { .. } | Self::Status { .. } => ErrorKind::Request,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Storage { .. } => ErrorKind::Storage,
        }
    }

    /// Name of the operation that failed, if the error came from one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::MissingApiKey | Self::InvalidConfig { .. } => None,
            Self::Request { operation, .. }
            | Self::Status { operation, .. }
            | Self::Parse { operation, .. }
            | Self::Storage { operation, .. } => Some(operation),
        }
    }

    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether the request timed out at the transport boundary.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }

    /// Whether the API rejected the credentials.
    pub fn is_authentication(&self) -> bool {
        match self {
            Self::Status {
                status, error_id, ..
            } => {
                *status == StatusCode::UNAUTHORIZED
                    || error_id.as_deref() == Some("authentication_failed")
            }
            _ => false,
        }
    }

    /// Whether a storage operation targeted an id with no stored record.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Storage {
                source: StoreError::NotFound(_),
                ..
            }
        )
    }

    /// Wrap a transport error. The request URL is dropped because its query
    /// carries the API key.
    pub(crate) fn request(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Request {
            operation,
            source: source.without_url(),
        }
    }

    pub(crate) fn parse(operation: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { operation, source }
    }

    pub(crate) fn storage(operation: &'static str, source: StoreError) -> Self {
        Self::Storage { operation, source }
    }

    /// Build a status error, pulling `id`/`details` out of Hunter's
    /// `{"errors": [...]}` payload when the body has one.
    pub(crate) fn status_with_body(
        operation: &'static str,
        status: StatusCode,
        body: String,
    ) -> Self {
        let first = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("errors")?.as_array()?.first().cloned());

        let field = |name: &str| {
            first
                .as_ref()
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self::Status {
            operation,
            status,
            message: field("details"),
            error_id: field("id"),
            body,
        }
    }
}
