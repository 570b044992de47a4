use thiserror::Error;

/// Result type alias for Fody operations
pub type Result<T> = std::result::Result<T, FodyError>;

/// Errors that can occur when talking to a Fody backend
#[derive(Error, Debug)]
pub enum FodyError {
    /// Handler name outside of `contactdb`, `events`, `tickets`, `checkticket`
    #[error("unknown handler '{0}': must be one of [contactdb, events, tickets, checkticket]")]
    UnknownHandler(String),

    /// A parameter failed local validation
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Backend answered with a status other than 200
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Login returned 200 but no `login_token`
    #[error("login response did not contain a login_token")]
    MissingToken,

    /// Response body was not JSON or did not have the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Invalid base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FodyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl FodyError {
    /// Shorthand for an [`FodyError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code if the backend rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the backend refused our credentials or token
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. } | Self::MissingToken)
    }

    /// Returns true if the error was raised before any request was sent
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnknownHandler(_)
                | Self::InvalidParameter { .. }
                | Self::InvalidUrl(_)
                | Self::Config(_)
        )
    }
}
