//! Response envelope handling.
//!
//! Every backend response arrives wrapped as
//! `{ success, data, message, timestamp }`, and several endpoints wrap the
//! payload a second time under another `data` key. Unwrapping checks
//! `success`, surfaces `message` on failure and descends nested `data` keys
//! until an actual payload remains.

use serde::Deserialize;
use serde_json::Value;

use crate::api::errors::ApiError;

/// Shown to the customer when the backend declines without a message of its
/// own.
pub const DEFAULT_FAILURE_MESSAGE: &str = "something went wrong, please try again";

/// The standardized response wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Whether the backend considers the request handled.
    pub success: bool,

    /// The wrapped payload. Possibly another envelope.
    #[serde(default)]
    pub data: Option<Value>,

    /// Backend-provided human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,

    /// Server time of the response. Shape varies by endpoint; never used.
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl Envelope {
    /// Unwrap the envelope down to its innermost payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the backend's `message` (or a
    /// generic fallback) when this envelope, or any envelope nested inside
    /// it, reports `success == false`.
    pub fn into_payload(self) -> Result<Value, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }

        let mut value = self.data.unwrap_or(Value::Null);

        loop {
            let Value::Object(map) = &mut value else {
                break;
            };

            if matches!(map.get("success"), Some(Value::Bool(false))) {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string(), str::to_string);

                return Err(ApiError::Rejected(message));
            }

            match map.remove("data") {
                Some(inner) => value = inner,
                None => break,
            }
        }

        Ok(value)
    }
}

/// Find the payment-gateway redirect URL in a checkout payload.
///
/// The backend has spelled the key `paymentUrl` and `payment_url` over time,
/// and sometimes tucks it a level down under `data`. Empty strings count as
/// absent.
#[must_use]
pub fn payment_url(payload: &Value) -> Option<&str> {
    let map = payload.as_object()?;

    for key in ["paymentUrl", "payment_url"] {
        if let Some(url) = map.get(key).and_then(Value::as_str) {
            if !url.is_empty() {
                return Some(url);
            }
        }
    }

    map.get("data").and_then(payment_url)
}
