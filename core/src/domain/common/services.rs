use std::sync::Arc;

use crate::domain::{
    recipe::ports::LLMClient, session::ports::SessionRepository, speech::ports::SpeechOutput,
};

/// Application service shared by every domain. Each domain implements its own
/// service trait on it.
pub struct Service<LLM, SR, SP>
where
    LLM: LLMClient,
    SR: SessionRepository,
    SP: SpeechOutput,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) session_repository: Arc<SR>,
    pub(crate) speech_output: Arc<SP>,
}

impl<LLM, SR, SP> Service<LLM, SR, SP>
where
    LLM: LLMClient,
    SR: SessionRepository,
    SP: SpeechOutput,
{
    pub fn new(llm_client: LLM, session_repository: SR, speech_output: SP) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            session_repository: Arc::new(session_repository),
            speech_output: Arc::new(speech_output),
        }
    }
}

impl<LLM, SR, SP> Clone for Service<LLM, SR, SP>
where
    LLM: LLMClient,
    SR: SessionRepository,
    SP: SpeechOutput,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            session_repository: Arc::clone(&self.session_repository),
            speech_output: Arc::clone(&self.speech_output),
        }
    }
}
