//! API response envelopes.
//!
//! Every backend endpoint wraps its payload the same way. Success:
//!
//! ```json
//! { "status": "success", "success": true, "message": "OK", "data": ... }
//! ```
//!
//! Failure carries no `success` key and no `data`:
//!
//! ```json
//! { "status": "error", "message": "Alert not found", "exception": "..." }
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors raised while unwrapping an API response.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API reported failure: {message}{}", exception_suffix(.exception))]
    Api {
        message: String,
        exception: Option<String>,
    },

    #[error("API reported success but returned no data")]
    MissingData,
}

fn exception_suffix(exception: &Option<String>) -> String {
    exception
        .as_deref()
        .map(|e| format!(" ({e})"))
        .unwrap_or_default()
}

/// Raw response envelope as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<T>,
    pub exception: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, mapping a failed or empty response to an error.
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Api {
                message: self
                    .message
                    .unwrap_or_else(|| "An error occurred".to_string()),
                exception: self.exception,
            });
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}

/// Decode a response body and unwrap its payload.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, EnvelopeError> {
    serde_json::from_slice::<ApiEnvelope<T>>(body)?.into_data()
}

/// What an endpoint returned when "nothing yet" is a valid answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Data(T),
    /// `success: true` with `data: null`, and the backend's explanation.
    Empty { message: Option<String> },
}

/// Like [`decode`], but a successful response without data is
/// [`Payload::Empty`] instead of an error.
pub fn decode_optional<T: DeserializeOwned>(body: &[u8]) -> Result<Payload<T>, EnvelopeError> {
    let envelope: ApiEnvelope<T> = serde_json::from_slice(body)?;
    if envelope.success && envelope.data.is_none() {
        return Ok(Payload::Empty {
            message: envelope.message,
        });
    }
    envelope.into_data().map(Payload::Data)
}

/// Decode a list endpoint. A successful response with `data: null` is an
/// empty list rather than an error.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, EnvelopeError> {
    match decode::<Vec<T>>(body) {
        Err(EnvelopeError::MissingData) => Ok(Vec::new()),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
