use serde::Deserialize;

use crate::errors::WorkerError;

/// Body of a signup queue message.
///
/// Upstream publishes signups through SNS, so the SQS body is a notification
/// envelope; the `Message` field carries the subscriber email address and
/// every other field is ignored.
#[derive(Debug, Deserialize)]
pub struct SignupNotification {
    #[serde(rename = "Message")]
    pub message: String,
}

impl SignupNotification {
    /// # Errors
    ///
    /// Returns an error if the body is not a valid notification envelope.
    pub fn parse(body: &str) -> Result<Self, WorkerError> {
        serde_json::from_str(body)
            .map_err(|e| WorkerError::ParseError(format!("signup message body: {e}")))
    }
}
