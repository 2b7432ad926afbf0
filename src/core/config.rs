use std::env;

use crate::core::remote_config::ConfigOverrides;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub newsletter_list_id: String,
    pub mailchimp_username: String,
    pub mailchimp_password: String,
    pub mailchimp_dc: String,
    pub queue_url: String,
    pub config_table: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error naming the first required variable that is missing.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            newsletter_list_id: env::var("MAILCHIMP_LIST_ID")
                .map_err(|e| format!("MAILCHIMP_LIST_ID: {}", e))?,
            mailchimp_username: env::var("MAILCHIMP_USERNAME")
                .map_err(|e| format!("MAILCHIMP_USERNAME: {}", e))?,
            mailchimp_password: env::var("MAILCHIMP_PASSWORD")
                .map_err(|e| format!("MAILCHIMP_PASSWORD: {}", e))?,
            mailchimp_dc: env::var("MAILCHIMP_DC").map_err(|e| format!("MAILCHIMP_DC: {}", e))?,
            queue_url: env::var("QUEUE_URL").map_err(|e| format!("QUEUE_URL: {}", e))?,
            config_table: env::var("CONFIG_TABLE")
                .map_err(|e| format!("CONFIG_TABLE: {}", e))?,
        })
    }

    /// Replace defaults with any values present in the remote config record.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.newsletter_list_id {
            self.newsletter_list_id = v;
        }
        if let Some(v) = overrides.mailchimp_username {
            self.mailchimp_username = v;
        }
        if let Some(v) = overrides.mailchimp_password {
            self.mailchimp_password = v;
        }
        if let Some(v) = overrides.mailchimp_dc {
            self.mailchimp_dc = v;
        }
        if let Some(v) = overrides.queue_url {
            self.queue_url = v;
        }
    }
}
