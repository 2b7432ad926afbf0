use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Failed to parse queue message: {0}")]
    ParseError(String),

    #[error("Failed to access Mailchimp API: {0}")]
    MailchimpError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<reqwest::Error> for WorkerError {
    fn from(error: reqwest::Error) -> Self {
        WorkerError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for WorkerError {
    fn from(error: serde_json::Error) -> Self {
        WorkerError::ParseError(error.to_string())
    }
}
