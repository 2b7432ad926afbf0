use std::collections::HashMap;

use aws_sdk_dynamodb::{Client as DynamoClient, types::AttributeValue};

use crate::errors::WorkerError;

/// Partition key shared by all config records this worker reads.
const CONFIG_SERVICE: &str = "lambda";

/// Optional overrides stored in the remote config table.
///
/// Member names on the wire (`mailChimpNewsletterId`, `queueUrl`, ...) match
/// the records the deployment tooling writes.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub newsletter_list_id: Option<String>,
    pub mailchimp_username: Option<String>,
    pub mailchimp_password: Option<String>,
    pub mailchimp_dc: Option<String>,
    pub queue_url: Option<String>,
}

/// Sort key of the config record for this function instance.
///
/// The version is the last `:` segment of the invoked function ARN; for an
/// unqualified ARN that segment is the function name itself, and config
/// records are written to match whatever the runtime reports.
#[must_use]
pub fn config_pointer(function_name: &str, invoked_function_arn: &str) -> String {
    let version = invoked_function_arn.rsplit(':').next().unwrap_or_default();
    format!("{function_name}:{version}")
}

/// Fetch the override record for `pointer`, if one exists.
///
/// A missing item or a missing `config` attribute means the deployment has
/// no overrides; that is not an error.
///
/// # Errors
///
/// Returns an error if the DynamoDB call fails.
pub async fn fetch_overrides(
    client: &DynamoClient,
    table: &str,
    pointer: &str,
) -> Result<Option<ConfigOverrides>, WorkerError> {
    let resp = client
        .get_item()
        .table_name(table)
        .key("service", AttributeValue::S(CONFIG_SERVICE.to_string()))
        .key("pointer", AttributeValue::S(pointer.to_string()))
        .send()
        .await
        .map_err(|e| WorkerError::AwsError(format!("dynamodb get_item: {e}")))?;

    let Some(item) = resp.item else {
        return Ok(None);
    };
    let Some(AttributeValue::M(config)) = item.get("config") else {
        return Ok(None);
    };

    Ok(Some(ConfigOverrides {
        newsletter_list_id: string_member(config, "mailChimpNewsletterId"),
        mailchimp_username: string_member(config, "mailChimpUserName"),
        mailchimp_password: string_member(config, "mailChimpPassword"),
        mailchimp_dc: string_member(config, "mailChimpDC"),
        queue_url: string_member(config, "queueUrl"),
    }))
}

fn string_member(map: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    map.get(name).and_then(|v| v.as_s().ok()).cloned()
}
