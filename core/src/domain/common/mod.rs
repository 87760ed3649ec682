use std::{fmt, time::Duration};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 60 * 60;

#[derive(Clone, Debug)]
pub struct CulinaryConfig {
    pub llm: LLMConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Sessions untouched for longer than this are evicted from the store.
    pub idle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl LLMConfig {
    /// The API key is the only credential the service needs; a blank one is fatal.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.gemini_api_key.trim().is_empty() {
            return Err(CoreError::ConfigurationMissing(
                "GEMINI_API_KEY".to_string(),
            ));
        }

        if self.gemini_model.trim().is_empty() {
            return Err(CoreError::ConfigurationMissing("GEMINI_MODEL".to_string()));
        }

        Ok(())
    }
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
