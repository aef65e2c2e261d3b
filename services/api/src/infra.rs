use chrono::{DateTime, Duration, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use prakriti::error::AppError;
use prakriti::workflows::assessment::{
    AssessmentSession, SessionId, SessionStore, SessionStoreError, UserProfile,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session map. With a TTL set, sessions older than the TTL are
/// dropped whenever a new session is inserted.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub(crate) fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl: Some(ttl),
        }
    }

    /// Removes every session created at least `ttl` before `now`.
    #[cfg(test)]
    pub(crate) fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        self.evict_locked(&mut guard, now)
    }

    fn evict_locked(
        &self,
        sessions: &mut HashMap<SessionId, AssessmentSession>,
        now: DateTime<Utc>,
    ) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let before = sessions.len();
        sessions.retain(|_, session| now - session.created_at() < ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "expired assessment sessions dropped");
        }
        evicted
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        self.evict_locked(&mut guard, Utc::now());
        if guard.contains_key(session.id()) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(session.id().clone(), session.clone());
        Ok(session)
    }

    fn modify(
        &self,
        id: &SessionId,
        apply: &mut dyn FnMut(&mut AssessmentSession),
    ) -> Result<AssessmentSession, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        let session = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        apply(session);
        Ok(session.clone())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        Ok(guard.remove(id))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Reads a profile JSON document in the same camelCase shape the HTTP API accepts.
pub(crate) fn load_profile(path: &Path) -> Result<UserProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let profile = serde_json::from_str(&raw)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriti::workflows::assessment::{QuestionBank, ResponseLevel};

    fn session(id: &str) -> AssessmentSession {
        AssessmentSession::new(
            SessionId(id.to_string()),
            Arc::new(QuestionBank::standard()),
            None,
        )
    }

    #[test]
    fn store_rejects_duplicates_and_unknown_updates() {
        let store = InMemorySessionStore::default();
        store.insert(session("session-1")).expect("first insert");

        assert!(matches!(
            store.insert(session("session-1")),
            Err(SessionStoreError::Conflict)
        ));
        assert!(matches!(
            store.modify(&SessionId("session-2".to_string()), &mut |_: &mut AssessmentSession| {}),
            Err(SessionStoreError::NotFound)
        ));

        let removed = store
            .remove(&SessionId("session-1".to_string()))
            .expect("remove succeeds");
        assert!(removed.is_some());
        assert!(store
            .fetch(&SessionId("session-1".to_string()))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn modify_applies_changes_in_place() {
        let store = InMemorySessionStore::default();
        let id = SessionId("session-1".to_string());
        store.insert(session("session-1")).expect("insert");

        let updated = store
            .modify(&id, &mut |session: &mut AssessmentSession| {
                session
                    .record(1, 0, ResponseLevel::Yes)
                    .expect("known characteristic");
            })
            .expect("session present");

        assert_eq!(updated.answers().len(), 1);
        let stored = store.fetch(&id).expect("fetch").expect("present");
        assert_eq!(stored.answers().len(), 1);
    }

    #[test]
    fn sessions_past_the_ttl_are_evicted() {
        let store = InMemorySessionStore::with_ttl(Duration::minutes(30));
        store.insert(session("session-1")).expect("insert");
        let id = SessionId("session-1".to_string());

        assert_eq!(store.evict_expired(Utc::now() + Duration::minutes(5)), 0);
        assert!(store.fetch(&id).expect("fetch").is_some());

        assert_eq!(store.evict_expired(Utc::now() + Duration::minutes(31)), 1);
        assert!(store.fetch(&id).expect("fetch").is_none());
    }

    #[test]
    fn insert_drops_expired_sessions() {
        let store = InMemorySessionStore::with_ttl(Duration::zero());
        store.insert(session("session-1")).expect("first insert");
        store.insert(session("session-2")).expect("second insert");

        assert!(store
            .fetch(&SessionId("session-1".to_string()))
            .expect("fetch")
            .is_none());
        assert!(store
            .fetch(&SessionId("session-2".to_string()))
            .expect("fetch")
            .is_some());
    }

    #[test]
    fn stores_without_ttl_keep_sessions() {
        let store = InMemorySessionStore::default();
        store.insert(session("session-1")).expect("insert");

        assert_eq!(store.evict_expired(Utc::now() + Duration::days(365)), 0);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-03-14 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"))
        );
        assert!(parse_date("14/03/2025")
            .expect_err("wrong format")
            .contains("YYYY-MM-DD"));
    }
}
