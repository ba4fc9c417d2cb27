//! Backend call failures.

use thiserror::Error;

use crate::traits::HttpError;

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a backend call did not produce a usable value.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never got an answer.
    #[error("{endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-success status.
    #[error("{endpoint}: server returned {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The body did not have the expected shape.
    #[error("{endpoint}: unexpected response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },

    /// The request body could not be built.
    #[error("{endpoint}: could not encode request: {message}")]
    Encode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Classify a transport error, pulling status failures into [`ApiError::Status`].
    pub fn from_http(endpoint: &'static str, err: HttpError) -> Self {
        match err {
            HttpError::Status { status, .. } => ApiError::Status { endpoint, status },
            source => ApiError::Transport { endpoint, source },
        }
    }

    pub fn decode(endpoint: &'static str, err: serde_json::Error) -> Self {
        ApiError::Decode {
            endpoint,
            message: err.to_string(),
        }
    }

    pub fn encode(endpoint: &'static str, err: serde_json::Error) -> Self {
        ApiError::Encode {
            endpoint,
            message: err.to_string(),
        }
    }

    /// The endpoint path the failure belongs to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. }
            | ApiError::Encode { endpoint, .. } => endpoint,
        }
    }

    /// Short error code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "E_API_TRANSPORT",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode { .. } => "E_API_DECODE",
            ApiError::Encode { .. } => "E_API_ENCODE",
        }
    }

    /// True when the backend was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}
