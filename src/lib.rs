//! Newsletter signup worker.
//!
//! A single-Lambda queue consumer that drains pending newsletter signup
//! events and subscribes each address to a Mailchimp list:
//! 1. Refreshes configuration from a DynamoDB table on every invocation,
//!    so credentials and the queue location can change without a redeploy
//! 2. Receives a batch of signup messages from SQS
//! 3. Subscribes each address through the Mailchimp members API and deletes
//!    the message once the address is on the list
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SQS as the signup event queue
//! - DynamoDB for live configuration overrides
//! - reqwest for the Mailchimp API calls
//! - Tokio for async runtime
//!
//! Processing is sequential and best-effort: a message is deleted if and
//! only if the subscribe call succeeded or Mailchimp reported the address as
//! an existing member; any other error aborts the invocation and leaves the
//! remaining messages for SQS redelivery.

pub mod core;
pub mod errors;
pub mod mailchimp;
pub mod queue;
pub mod worker;

/// Set up structured JSON logging.
///
/// # Example
///
/// ```
/// signup_worker::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
