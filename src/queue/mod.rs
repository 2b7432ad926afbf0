//! SQS queue operations.
//!
//! The worker drains the signup queue with a single batched receive per
//! invocation and deletes messages individually once they are processed.

use aws_sdk_sqs::Client as SqsClient;

use crate::errors::WorkerError;

/// Maximum number of messages pulled per invocation.
pub const MAX_BATCH_SIZE: i32 = 5;

/// A received queue message: the body plus the receipt handle needed to
/// delete it.
#[derive(Debug, Clone)]
pub struct ReceivedMessage {
    pub receipt_handle: String,
    pub body: String,
}

/// # Errors
///
/// Returns an error if the receive call fails.
pub async fn receive_batch(
    client: &SqsClient,
    queue_url: &str,
) -> Result<Vec<ReceivedMessage>, WorkerError> {
    let resp = client
        .receive_message()
        .queue_url(queue_url)
        .max_number_of_messages(MAX_BATCH_SIZE)
        .send()
        .await
        .map_err(|e| WorkerError::AwsError(format!("Failed to receive messages from SQS: {e}")))?;

    Ok(resp
        .messages
        .unwrap_or_default()
        .into_iter()
        .filter_map(|message| {
            let receipt_handle = message.receipt_handle?;
            let body = message.body?;
            Some(ReceivedMessage {
                receipt_handle,
                body,
            })
        })
        .collect())
}

/// # Errors
///
/// Returns an error if the delete call fails.
pub async fn delete_message(
    client: &SqsClient,
    queue_url: &str,
    receipt_handle: &str,
) -> Result<(), WorkerError> {
    client
        .delete_message()
        .queue_url(queue_url)
        .receipt_handle(receipt_handle)
        .send()
        .await
        .map_err(|e| WorkerError::AwsError(format!("Failed to delete message from SQS: {e}")))?;
    Ok(())
}
