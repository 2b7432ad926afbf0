use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_sqs::Client as SqsClient;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::SignupNotification;
use crate::core::remote_config;
use crate::mailchimp::{MailchimpClient, SubscribeOutcome};
use crate::queue;

/// Lambda handler for the signup worker. Refreshes config from DynamoDB,
/// drains a batch of signup messages from SQS, and subscribes each address
/// to the newsletter list.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    let mut config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        "Worker Lambda received invocation payload: {:?}",
        event.payload
    );

    let shared_config = aws_config::from_env().load().await;
    let dynamo_client = DynamoClient::new(&shared_config);

    let function_name = std::env::var("AWS_LAMBDA_FUNCTION_NAME").unwrap_or_default();
    let pointer =
        remote_config::config_pointer(&function_name, &event.context.invoked_function_arn);

    match remote_config::fetch_overrides(&dynamo_client, &config.config_table, &pointer).await {
        Ok(Some(overrides)) => {
            config.apply_overrides(overrides);
            info!("Applied remote config overrides for {}", pointer);
        }
        Ok(None) => {
            info!("No remote config found for {}, keeping defaults", pointer);
        }
        Err(e) => {
            error!("Failed to fetch remote config: {}", e);
            return Err(Error::from(e));
        }
    }

    let sqs_client = SqsClient::new(&shared_config);
    let messages = queue::receive_batch(&sqs_client, &config.queue_url)
        .await
        .map_err(|e| {
            error!("Failed to receive messages: {}", e);
            Error::from(e)
        })?;

    if messages.is_empty() {
        info!("0 messages received");
        return Ok(());
    }
    info!("{} messages received", messages.len());

    let mailchimp = MailchimpClient::from_config(&config);

    for message in messages {
        let notification = SignupNotification::parse(&message.body).map_err(|e| {
            error!(
                "Failed to parse message (receipt handle: {}): {}",
                message.receipt_handle, e
            );
            Error::from(e)
        })?;

        match mailchimp.subscribe(&notification.message).await {
            Ok(SubscribeOutcome::Subscribed) => {
                info!(
                    "Subscribed {} (receipt handle: {})",
                    notification.message, message.receipt_handle
                );
            }
            Ok(SubscribeOutcome::AlreadyMember) => {
                info!(
                    "{} is already a member (receipt handle: {})",
                    notification.message, message.receipt_handle
                );
            }
            Err(e) => {
                error!(
                    "Failed to subscribe {} (receipt handle: {}): {}",
                    notification.message, message.receipt_handle, e
                );
                return Err(Error::from(e));
            }
        }

        queue::delete_message(&sqs_client, &config.queue_url, &message.receipt_handle)
            .await
            .map_err(|e| {
                error!(
                    "Failed to delete message (receipt handle: {}): {}",
                    message.receipt_handle, e
                );
                Error::from(e)
            })?;
        info!(
            "Deleted message (receipt handle: {})",
            message.receipt_handle
        );
    }

    Ok(())
}

pub use self::function_handler as handler;
