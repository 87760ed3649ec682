use tracing::info;

use crate::{
    domain::common::{CulinaryConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::GeminiLLMClient, session::InMemorySessionRepository, speech::TracingSpeechOutput,
    },
};

pub type CulinaryService =
    Service<GeminiLLMClient, InMemorySessionRepository, TracingSpeechOutput>;

pub fn create_service(config: CulinaryConfig) -> Result<CulinaryService, CoreError> {
    config.llm.validate()?;

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model.clone(),
        config.llm.gemini_base_url,
    );

    info!(
        model = %config.llm.gemini_model,
        session_idle_timeout_secs = config.session.idle_timeout.as_secs(),
        "Culinary service ready"
    );

    Ok(Service::new(
        llm_client,
        InMemorySessionRepository::with_idle_timeout(config.session.idle_timeout),
        TracingSpeechOutput::new(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{
        DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, SessionConfig,
    };

    #[test]
    fn test_blank_key_fails_at_startup() {
        let config = CulinaryConfig {
            llm: LLMConfig {
                gemini_api_key: String::new(),
                gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
                gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            },
            session: SessionConfig::default(),
        };

        assert!(matches!(
            create_service(config),
            Err(CoreError::ConfigurationMissing(name)) if name == "GEMINI_API_KEY"
        ));
    }
}
