use tracing::info;
use uuid::Uuid;

use crate::domain::speech::ports::SpeechOutput;

/// Server-side speech sink. Actual synthesis happens on the client, which
/// follows the `speaking` flag of the cooking view; this adapter records the
/// utterances so they show up in the logs.
#[derive(Debug, Default, Clone)]
pub struct TracingSpeechOutput;

impl TracingSpeechOutput {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechOutput for TracingSpeechOutput {
    fn speak(&self, session_id: Uuid, text: &str) {
        info!(session_id = %session_id, chars = text.chars().count(), "Speaking step");
    }

    fn cancel(&self, session_id: Uuid) {
        info!(session_id = %session_id, "Speech cancelled");
    }
}
