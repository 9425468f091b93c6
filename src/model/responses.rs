use crate::error::AppError;
use hyper::ext::ReasonPhrase;
use pretty_simple_display::DisplaySimple;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Raw outcome of an upload call
///
/// Returned whatever the status code, so callers can decide whether to retry.
#[derive(Debug, DisplaySimple, Serialize, Clone)]
pub struct UploadResponse {
    /// HTTP status code
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    /// Reason phrase for the status, empty when unknown
    pub reason: String,
    /// Response body as text
    pub body: String,
}

/// Reason phrase the server sent with `response`
///
/// Falls back to the canonical phrase of the status when the server used the
/// standard one (hyper only keeps non-canonical phrases) and to an empty string
/// for unknown codes.
pub fn reason_phrase(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

fn serialize_status<S: serde::Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

impl UploadResponse {
    /// Creates a response from its parts; the reason phrase is derived from the status
    pub fn new(status: StatusCode, body: String) -> Self {
        Self {
            status,
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }

    /// Creates a response with the reason phrase the server actually sent
    pub fn from_parts(status: StatusCode, reason: String, body: String) -> Self {
        Self {
            status,
            reason,
            body,
        }
    }

    /// `true` for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}
