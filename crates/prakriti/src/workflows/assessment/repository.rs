use super::session::{AssessmentSession, SessionId};

/// Storage abstraction for in-flight sessions so the service can be exercised
/// in isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, SessionStoreError>;
    /// Runs `apply` against the stored session while holding exclusive access
    /// to it and returns the session as left by `apply`. Concurrent calls for
    /// the same id must not interleave.
    fn modify(
        &self,
        id: &SessionId,
        apply: &mut dyn FnMut(&mut AssessmentSession),
    ) -> Result<AssessmentSession, SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError>;
    fn remove(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
