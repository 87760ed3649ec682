use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        ports::{LLMClient, RecipeGenerator},
        value_objects::GenerateRecipesInput,
    },
    session::{
        entities::SessionState,
        ports::{SessionHandle, SessionRepository, SessionService},
        value_objects::{Dispatch, GenerationRequest, SessionEffect, SessionIntent, SessionSnapshot},
    },
    speech::ports::SpeechOutput,
};

impl<LLM, SR, SP> SessionService for Service<LLM, SR, SP>
where
    LLM: LLMClient + 'static,
    SR: SessionRepository + 'static,
    SP: SpeechOutput + 'static,
{
    #[instrument(skip(self))]
    async fn create_session(&self) -> Result<SessionSnapshot, CoreError> {
        let handle = self.session_repository.create(SessionState::new()).await?;
        let state = handle.lock().await;
        info!(session_id = %state.id(), "Session created");
        Ok(state.snapshot())
    }

    async fn get_session(&self, session_id: Uuid) -> Result<SessionSnapshot, CoreError> {
        let handle = self.session_handle(session_id).await?;
        let state = handle.lock().await;
        Ok(state.snapshot())
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if !self.session_repository.delete(session_id).await? {
            return Err(CoreError::SessionNotFound);
        }

        self.speech_output.cancel(session_id);
        Ok(())
    }

    #[instrument(skip(self, intent))]
    async fn dispatch(
        &self,
        session_id: Uuid,
        intent: SessionIntent,
    ) -> Result<Dispatch, CoreError> {
        let handle = self.session_handle(session_id).await?;
        let mut state = handle.lock().await;

        let effects = state.apply(intent).inspect_err(|e| {
            warn!("Intent rejected: {}", e);
        })?;

        let mut generation = None;
        for effect in effects {
            match effect {
                SessionEffect::CancelSpeech => self.speech_output.cancel(session_id),
                SessionEffect::Speak { text } => self.speech_output.speak(session_id, &text),
                SessionEffect::Generate(request) => {
                    generation = Some(self.spawn_generation(handle.clone(), request));
                }
            }
        }

        Ok(Dispatch {
            snapshot: state.snapshot(),
            generation,
        })
    }
}

impl<LLM, SR, SP> Service<LLM, SR, SP>
where
    LLM: LLMClient + 'static,
    SR: SessionRepository + 'static,
    SP: SpeechOutput + 'static,
{
    async fn session_handle(&self, session_id: Uuid) -> Result<SessionHandle, CoreError> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::SessionNotFound)
    }

    /// Runs the request off the session lock; the outcome is applied under the
    /// lock again and dropped if a newer request was issued meanwhile.
    fn spawn_generation(
        &self,
        handle: SessionHandle,
        request: GenerationRequest,
    ) -> JoinHandle<SessionSnapshot> {
        let service = self.clone();

        tokio::spawn(async move {
            let GenerationRequest {
                token,
                image,
                filters,
            } = request;

            let outcome = service
                .generate_recipes(GenerateRecipesInput { image, filters })
                .await;

            let mut state = handle.lock().await;
            if state.resolve_generation(token, outcome) {
                info!(
                    session_id = %state.id(),
                    token = token.value(),
                    recipes = state.recipes().len(),
                    failed = state.error().is_some(),
                    "Generation applied"
                );
            } else {
                debug!(session_id = %state.id(), token = token.value(), "Generation superseded");
            }
            state.snapshot()
        })
    }
}
