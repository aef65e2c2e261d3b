use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::assessment::bank::QuestionBank;
use crate::workflows::assessment::domain::{Dosha, ResponseLevel};
use crate::workflows::assessment::profile::{Gender, UserProfile};
use crate::workflows::assessment::repository::{SessionStore, SessionStoreError};
use crate::workflows::assessment::session::{AssessmentSession, SessionId};
use crate::workflows::assessment::{assessment_router, AnswerSheet, AssessmentService};

pub(super) fn profile() -> UserProfile {
    UserProfile {
        first_name: "Ravi".to_string(),
        last_name: "Van Dyke".to_string(),
        email: "ravi@example.com".to_string(),
        age: 34,
        gender: Gender::Male,
        location: "Austin TX".to_string(),
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) fn standard_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

/// Answers every characteristic of the standard bank with the level chosen
/// for its dosha.
pub(super) fn sheet_with<F>(level_for: F) -> AnswerSheet
where
    F: Fn(Dosha) -> ResponseLevel,
{
    let bank = QuestionBank::standard();
    let mut sheet = AnswerSheet::new();
    for question in bank.questions() {
        for (index, characteristic) in question.characteristics.iter().enumerate() {
            sheet.record(
                question.id,
                index,
                level_for(characteristic.dosha),
                characteristic.dosha,
            );
        }
    }
    sheet
}

pub(super) fn answer_session<F>(session: &mut AssessmentSession, level_for: F)
where
    F: Fn(Dosha) -> ResponseLevel,
{
    let questions: Vec<(u32, Vec<Dosha>)> = session
        .bank()
        .questions()
        .iter()
        .map(|question| {
            (
                question.id,
                question.characteristics.iter().map(|c| c.dosha).collect(),
            )
        })
        .collect();

    for (question_id, doshas) in questions {
        for (index, dosha) in doshas.into_iter().enumerate() {
            session
                .record(question_id, index, level_for(dosha))
                .expect("standard characteristic");
        }
    }
}

pub(super) fn vata_only(dosha: Dosha) -> ResponseLevel {
    if dosha == Dosha::Vata {
        ResponseLevel::Yes
    } else {
        ResponseLevel::No
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(store.clone(), standard_bank());
    (service, store)
}

pub(super) fn answer_everything<S: SessionStore + 'static>(
    service: &AssessmentService<S>,
    id: &SessionId,
    level_for: impl Fn(Dosha) -> ResponseLevel,
) {
    let bank = service.shared_bank();
    for question in bank.questions() {
        for (index, characteristic) in question.characteristics.iter().enumerate() {
            service
                .record(id, question.id, index, level_for(characteristic.dosha))
                .expect("answer recorded");
        }
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.sessions.lock().expect("store mutex poisoned").len()
    }
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("store mutex poisoned");
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
        let mut guard = self.sessions.lock().expect("store mutex poisoned");
        let session = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        apply(session);
        Ok(session.clone())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("store mutex poisoned");
        Ok(guard.remove(id))
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _session: AssessmentSession) -> Result<AssessmentSession, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn modify(
        &self,
        _id: &SessionId,
        _apply: &mut dyn FnMut(&mut AssessmentSession),
    ) -> Result<AssessmentSession, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<Option<AssessmentSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryStore>) -> axum::Router {
    assessment_router(Arc::new(service))
}
