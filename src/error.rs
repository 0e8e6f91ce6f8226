//! Error taxonomy shared by repositories, use-cases and screen state holders
//!
//! Transport failures are classified into a [`GeneralError`] at the repository
//! boundary. Nothing above that boundary ever sees a `reqwest::Error`.

use thiserror::Error;

/// Classified API failure, used to pick the illustration and message shown to the user
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeneralError {
    /// Connectivity problem or timeout
    #[error("network error")]
    NetworkError,

    /// The request was valid but the resource does not exist
    #[error("not found")]
    NotFound,

    /// TMDB rejected the API key
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success HTTP status
    #[error("api error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Catch-all (malformed payloads, I/O on local stores, ...)
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl GeneralError {
    /// Short user-facing message for this kind of failure
    pub fn user_message(&self) -> String {
        match self {
            GeneralError::NetworkError => {
                "No internet connection. Check your network and try again.".to_string()
            }
            GeneralError::NotFound => "We couldn't find what you were looking for.".to_string(),
            GeneralError::Unauthorized => {
                "TMDB rejected the API key. Check your configuration.".to_string()
            }
            GeneralError::ApiError { message, .. } if !message.is_empty() => {
                format!("The server returned an error: {}", message)
            }
            GeneralError::ApiError { status, .. } => {
                format!("The server returned an error (HTTP {}).", status)
            }
            GeneralError::Unknown(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Classify a transport error coming out of reqwest
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            return GeneralError::NetworkError;
        }
        if let Some(status) = error.status() {
            return Self::from_status(status.as_u16(), String::new());
        }
        if error.is_decode() {
            return GeneralError::Unknown(format!("malformed response: {}", error));
        }
        if error.is_request() || error.is_body() {
            return GeneralError::NetworkError;
        }
        GeneralError::Unknown(error.to_string())
    }

    /// Classify a non-success HTTP status, keeping TMDB's `status_message` if any
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => GeneralError::NotFound,
            401 => GeneralError::Unauthorized,
            _ => GeneralError::ApiError { status, message },
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, GeneralError::NetworkError)
    }
}

pub type ApiResult<T> = Result<T, GeneralError>;
