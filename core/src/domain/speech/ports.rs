use uuid::Uuid;

/// Text-to-speech capability used by cooking mode.
///
/// At most one utterance is live per session: `speak` is only issued after any
/// previous utterance of the same session was cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, session_id: Uuid, text: &str);

    fn cancel(&self, session_id: Uuid);
}
