use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    common::{DEFAULT_SESSION_IDLE_TIMEOUT_SECS, entities::app_errors::CoreError},
    session::{
        entities::SessionState,
        ports::{SessionHandle, SessionRepository},
    },
};

type SessionMap = HashMap<Uuid, SessionHandle>;

/// Process-local session store. Sessions live until deleted or until they sit
/// idle for longer than `idle_timeout`; idle ones are swept whenever a new
/// session is created.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<SessionMap>>,
    idle_timeout: TimeDelta,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::from_secs(DEFAULT_SESSION_IDLE_TIMEOUT_SECS))
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            idle_timeout: TimeDelta::from_std(idle_timeout).unwrap_or(TimeDelta::MAX),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle past the timeout and returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions, Utc::now())
    }

    fn evict_idle_locked(&self, sessions: &mut SessionMap, now: DateTime<Utc>) -> usize {
        let Some(cutoff) = now.checked_sub_signed(self.idle_timeout) else {
            return 0;
        };

        let before = sessions.len();
        // A locked session is in use, so it is never idle.
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(state) => state.updated_at() >= cutoff,
            Err(_) => true,
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, live = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, state: SessionState) -> Result<SessionHandle, CoreError> {
        let id = state.id();
        let handle = Arc::new(Mutex::new(state));

        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions, Utc::now());

        if sessions.contains_key(&id) {
            return Err(CoreError::InternalServerError);
        }
        sessions.insert(id, handle.clone());
        debug!(session_id = %id, live = sessions.len(), "Session stored");

        Ok(handle)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<SessionHandle>, CoreError> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_delete() {
        let repository = InMemorySessionRepository::new();
        let state = SessionState::new();
        let id = state.id();

        repository.create(state).await.unwrap();
        assert_eq!(repository.session_count().await, 1);

        let handle = repository.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(handle.lock().await.id(), id);

        assert!(repository.delete(id).await.unwrap());
        assert!(!repository.delete(id).await.unwrap());
        assert!(repository.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_handles_share_state() {
        let repository = InMemorySessionRepository::new();
        let first = repository.create(SessionState::new()).await.unwrap();
        let id = first.lock().await.id();

        first.lock().await.error = Some("boom".to_string());

        let second = repository.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(second.lock().await.error(), Some("boom"));
    }

    #[tokio::test]
    async fn test_creating_a_session_evicts_idle_ones() {
        let repository = InMemorySessionRepository::with_idle_timeout(Duration::from_secs(60));

        let stale = repository.create(SessionState::new()).await.unwrap();
        let stale_id = stale.lock().await.id();
        stale.lock().await.updated_at = Utc::now() - TimeDelta::days(30);
        drop(stale);

        let fresh = SessionState::new();
        let fresh_id = fresh.id();
        repository.create(fresh).await.unwrap();

        assert_eq!(repository.session_count().await, 1);
        assert!(repository.get_by_id(stale_id).await.unwrap().is_none());
        assert!(repository.get_by_id(fresh_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sessions_in_use_are_not_evicted() {
        let repository = InMemorySessionRepository::with_idle_timeout(Duration::from_secs(60));

        let busy = repository.create(SessionState::new()).await.unwrap();
        let mut guard = busy.lock().await;
        guard.updated_at = Utc::now() - TimeDelta::days(30);

        assert_eq!(repository.evict_idle().await, 0);
        assert_eq!(repository.session_count().await, 1);

        drop(guard);
        assert_eq!(repository.evict_idle().await, 1);
        assert_eq!(repository.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_recent_sessions_survive_a_sweep() {
        let repository = InMemorySessionRepository::new();
        for _ in 0..3 {
            repository.create(SessionState::new()).await.unwrap();
        }

        assert_eq!(repository.evict_idle().await, 0);
        assert_eq!(repository.session_count().await, 3);
    }
}
