use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::bank::QuestionBank;
use super::domain::{AssessmentError, ResponseLevel, Step};
use super::profile::{ProfileError, UserProfile};
use super::report::{render_document, AssessmentReport, DocumentFormat, ReportDocument};
use super::repository::{SessionStore, SessionStoreError};
use super::scoring::ScoreAggregate;
use super::session::{AssessmentSession, SessionId};

/// Service driving sessions through profile capture, answering, scoring, and
/// report export.
pub struct AssessmentService<S> {
    bank: Arc<QuestionBank>,
    store: Arc<S>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S> AssessmentService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, bank: Arc<QuestionBank>) -> Self {
        Self { bank, store }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn shared_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// Validate the profile and open a new session for it.
    pub fn start(&self, profile: UserProfile) -> Result<AssessmentSession, AssessmentServiceError> {
        let profile = profile.validate()?;
        let session = AssessmentSession::new(next_session_id(), self.shared_bank(), Some(profile));

        let stored = self.store.insert(session)?;
        info!(session = %stored.id(), "assessment session started");
        Ok(stored)
    }

    pub fn get(&self, id: &SessionId) -> Result<AssessmentSession, AssessmentServiceError> {
        let session = self.store.fetch(id)?.ok_or(SessionStoreError::NotFound)?;
        Ok(session)
    }

    pub fn record(
        &self,
        id: &SessionId,
        question_id: u32,
        characteristic_index: usize,
        level: ResponseLevel,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        let (session, ()) = self.apply(id, |session| {
            session.record(question_id, characteristic_index, level)
        })?;
        debug!(session = %id, question_id, characteristic_index, ?level, "answer recorded");
        Ok(session)
    }

    pub fn navigate(
        &self,
        id: &SessionId,
        step: Step,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        let (session, _) = self.apply(id, |session| session.step(step))?;
        Ok(session)
    }

    /// Calculate and persist the score distribution for a finished session.
    pub fn finalize(
        &self,
        id: &SessionId,
        today: NaiveDate,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let (session, aggregate) = self.apply(id, AssessmentSession::finalize)?;

        info!(
            session = %id,
            vata = aggregate.distribution.vata,
            pitta = aggregate.distribution.pitta,
            kapha = aggregate.distribution.kapha,
            fallback = aggregate.fallback,
            "assessment results calculated"
        );

        Ok(report_for(&session, &aggregate, today))
    }

    pub fn report(
        &self,
        id: &SessionId,
        today: NaiveDate,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let session = self.get(id)?;
        let aggregate = session
            .results()
            .copied()
            .ok_or(AssessmentError::ResultsPending)?;
        Ok(report_for(&session, &aggregate, today))
    }

    pub fn document(
        &self,
        id: &SessionId,
        format: DocumentFormat,
        today: NaiveDate,
    ) -> Result<ReportDocument, AssessmentServiceError> {
        let report = self.report(id, today)?;
        let document = render_document(&report, format)?;
        info!(session = %id, file = %document.file_name, "report document exported");
        Ok(document)
    }

    /// Runs one session transition inside the store's exclusive access.
    /// Session transitions validate before touching state, so a rejected
    /// transition leaves the stored session as it was.
    fn apply<T>(
        &self,
        id: &SessionId,
        mut transition: impl FnMut(&mut AssessmentSession) -> Result<T, AssessmentError>,
    ) -> Result<(AssessmentSession, T), AssessmentServiceError> {
        let mut outcome = None;
        let session = self.store.modify(id, &mut |session: &mut AssessmentSession| {
            outcome = Some(transition(session));
        })?;
        let value = outcome.ok_or_else(|| {
            SessionStoreError::Unavailable(format!("store skipped the update for {id}"))
        })??;
        Ok((session, value))
    }

    /// Drop the session and everything it holds.
    pub fn discard(&self, id: &SessionId) -> Result<(), AssessmentServiceError> {
        self.store.remove(id)?.ok_or(SessionStoreError::NotFound)?;
        info!(session = %id, "assessment session discarded");
        Ok(())
    }
}

fn report_for(
    session: &AssessmentSession,
    aggregate: &ScoreAggregate,
    today: NaiveDate,
) -> AssessmentReport {
    AssessmentReport::new(aggregate.distribution, session.profile().cloned(), today)
        .with_fallback(aggregate.fallback)
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
