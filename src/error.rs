/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors produced by the TDX client
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// Local file system failure, e.g. reading the file to upload
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// The login endpoint answered with a non-success status
    AuthenticationFailed {
        /// HTTP status returned by the login endpoint
        status: StatusCode,
        /// Reason phrase for the status, empty when unknown
        reason: String,
        /// Raw response body
        body: String,
    },
    /// The login call succeeded but returned no token
    MissingToken,
    /// Bad argument or configuration value
    InvalidInput(String),
    /// Response body could not be interpreted
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::AuthenticationFailed { status, reason, .. } => {
                write!(f, "authentication failed: {} {}", status.as_u16(), reason)
            }
            AppError::MissingToken => write!(f, "authentication succeeded but no token was returned"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
