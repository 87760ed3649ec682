use std::{future::Future, sync::Arc};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::SessionState,
        value_objects::{Dispatch, SessionIntent, SessionSnapshot},
    },
};

/// Shared handle to one session. The mutex is the session's mutation queue:
/// every transition runs while holding it.
pub type SessionHandle = Arc<Mutex<SessionState>>;

/// Repository trait for live sessions
pub trait SessionRepository: Send + Sync {
    fn create(
        &self,
        state: SessionState,
    ) -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<SessionHandle>, CoreError>> + Send;

    /// Returns `false` when no session had this id.
    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait driving the session state machine
pub trait SessionService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn delete_session(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Applies one intent under the session lock, runs its speech effects and
    /// starts any generation request it produced.
    fn dispatch(
        &self,
        session_id: Uuid,
        intent: SessionIntent,
    ) -> impl Future<Output = Result<Dispatch, CoreError>> + Send;
}
