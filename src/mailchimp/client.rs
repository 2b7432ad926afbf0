//! Mailchimp members API client.
//!
//! Encapsulates the single API interaction this worker performs: adding a
//! subscriber to a mailing list.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::config::AppConfig;
use crate::errors::WorkerError;

/// Fixed timeout for the subscribe request.
const SUBSCRIBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Error title Mailchimp returns when the address is already on the list.
const MEMBER_EXISTS_TITLE: &str = "Member Exists";

/// Outcome of a successful subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The address was added to the list.
    Subscribed,
    /// The address was already on the list. Treated as success so the
    /// message still gets deleted.
    AlreadyMember,
}

/// Problem document Mailchimp returns on failure responses.
#[derive(Debug, Deserialize)]
struct MailchimpFailure {
    title: Option<String>,
    status: Option<u64>,
    detail: Option<String>,
}

pub struct MailchimpClient {
    http_client: Client,
    api_base: String,
    list_id: String,
    username: String,
    password: String,
}

impl MailchimpClient {
    #[must_use]
    pub fn new(api_base: String, list_id: String, username: String, password: String) -> Self {
        let http_client = Client::builder()
            .timeout(SUBSCRIBE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http_client,
            api_base,
            list_id,
            username,
            password,
        }
    }

    /// Build a client against the datacenter-qualified production host.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            format!("https://{}.api.mailchimp.com", config.mailchimp_dc),
            config.newsletter_list_id.clone(),
            config.mailchimp_username.clone(),
            config.mailchimp_password.clone(),
        )
    }

    fn members_url(&self) -> String {
        format!("{}/3.0/lists/{}/members", self.api_base, self.list_id)
    }

    /// Subscribe `email` to the configured list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or times out, or if Mailchimp
    /// rejects the subscription for any reason other than the address
    /// already being a member.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, WorkerError> {
        let resp = self
            .http_client
            .post(self.members_url())
            .basic_auth(&self.username, Some(&self.password))
            .json(&subscribe_payload(email))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(SubscribeOutcome::Subscribed);
        }

        let body = resp.text().await.unwrap_or_default();
        interpret_failure(status, &body)
    }
}

/// Build the JSON payload for the members endpoint.
#[must_use]
fn subscribe_payload(email: &str) -> Value {
    json!({
        "status": "subscribed",
        "email_address": email,
    })
}

/// Decide whether a failure response is fatal.
///
/// Mailchimp reports an address that is already on the list as an HTTP
/// failure titled `Member Exists`; the worker treats that as success.
fn interpret_failure(status: StatusCode, body: &str) -> Result<SubscribeOutcome, WorkerError> {
    let failure: MailchimpFailure = match serde_json::from_str(body) {
        Ok(failure) => failure,
        Err(_) => {
            return Err(WorkerError::MailchimpError(format!(
                "subscribe failed with status {status}: {body}"
            )));
        }
    };

    if failure.title.as_deref() == Some(MEMBER_EXISTS_TITLE) {
        return Ok(SubscribeOutcome::AlreadyMember);
    }

    Err(WorkerError::MailchimpError(format!(
        "subscribe failed with status {}: {}",
        failure.status.unwrap_or_else(|| u64::from(status.as_u16())),
        failure
            .detail
            .unwrap_or_else(|| "no detail provided".to_string())
    )))
}
