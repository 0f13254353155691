use thiserror::Error;

use crate::models::ErrorResponse;
use crate::response::RawResponse;

/// Errors returned by client construction and REST operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// The external-config auth type label is not a supported literal.
    ///
    /// Only `noauth` is accepted from `BLOCKCHAIN_AUTH_TYPE`; the match is
    /// case-sensitive.
    #[error("unsupported auth type '{0}'")]
    UnsupportedAuthType(String),

    /// An authenticator was configured with an empty credential field.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// No base URL is configured on the client.
    #[error("service URL missing; configure one via `ClientOptions::url` or `set_service_url`")]
    MissingServiceUrl,

    /// A required path template parameter was not provided or was empty.
    #[error("missing required path parameter '{parameter}' for operation '{operation_id}'")]
    MissingPathParameter {
        operation_id: &'static str,
        parameter: &'static str,
    },

    /// A required request field was empty.
    #[error("missing required field '{field}' for operation '{operation_id}'")]
    MissingRequiredField {
        operation_id: &'static str,
        field: &'static str,
    },

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body could not be parsed into the expected result type.
    ///
    /// The raw response is retained so status and headers stay accessible.
    #[error("failed to parse response body: {source}")]
    Deserialization {
        source: serde_json::Error,
        response: RawResponse,
    },

    /// Non-success HTTP status.
    ///
    /// `error` holds the server's error payload when it parsed as JSON; the
    /// raw response is always retained.
    #[error("server returned status {}: {}", .response.status, .response.body)]
    HttpStatus {
        error: Option<ErrorResponse>,
        response: RawResponse,
    },
}

impl ClientError {
    /// Returns the raw HTTP response attached to this error, when one exists.
    ///
    /// Present for server-status and decoding failures; absent for
    /// configuration, validation, and transport failures.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Deserialization { response, .. } | Self::HttpStatus { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }
}
