use std::sync::Arc;

use super::common::*;
use crate::workflows::assessment::bank::QuestionBank;
use crate::workflows::assessment::domain::{
    AssessmentError, Characteristic, Dosha, Question, ResponseLevel, Step,
};
use crate::workflows::assessment::session::{AssessmentSession, SessionId};

fn session() -> AssessmentSession {
    AssessmentSession::new(
        SessionId("session-test".to_string()),
        standard_bank(),
        Some(profile()),
    )
}

fn answer_question(session: &mut AssessmentSession, question_id: u32, level: ResponseLevel) {
    for index in 0..3 {
        session
            .record(question_id, index, level)
            .expect("standard characteristic");
    }
}

#[test]
fn new_session_starts_at_first_question() {
    let session = session();
    let status = session.status_view();

    assert_eq!(status.current_question, 1);
    assert_eq!(status.question_id, Some(1));
    assert_eq!(status.total_questions, 5);
    assert_eq!(status.progress_pct, 0);
    assert!(!status.can_advance);
    assert!(!status.can_go_back);
    assert!(!status.finished);
    assert!(status.has_profile);
}

#[test]
fn completion_requires_every_characteristic_and_never_regresses() {
    let mut session = session();
    assert!(!session.is_complete(0));

    session.record(1, 0, ResponseLevel::Yes).expect("recorded");
    session.record(1, 1, ResponseLevel::No).expect("recorded");
    assert!(!session.is_complete(0));

    session.record(1, 2, ResponseLevel::Somewhat).expect("recorded");
    assert!(session.is_complete(0));

    session.record(1, 2, ResponseLevel::No).expect("overwrite");
    session.record(2, 0, ResponseLevel::Yes).expect("recorded");
    assert!(session.is_complete(0));
    assert!(!session.is_complete(1));
    assert!(!session.is_complete(7));
    assert_eq!(session.answers().len(), 4);
}

#[test]
fn next_is_gated_on_the_current_question() {
    let mut session = session();
    session.record(1, 0, ResponseLevel::Yes).expect("recorded");

    assert_eq!(
        session.step(Step::Next),
        Err(AssessmentError::QuestionIncomplete(1))
    );
    assert_eq!(session.cursor(), 0);

    answer_question(&mut session, 1, ResponseLevel::Yes);
    assert!(session.can_advance());
    assert_eq!(session.progress_pct(), 20);
    assert_eq!(session.step(Step::Next), Ok(1));
    assert_eq!(session.progress_pct(), 20);
    assert!(session.can_go_back());

    assert_eq!(session.step(Step::Previous), Ok(0));
    assert_eq!(
        session.step(Step::Previous),
        Err(AssessmentError::AtFirstQuestion)
    );
}

#[test]
fn last_question_cannot_advance_and_progress_reaches_full() {
    let mut session = session();
    for question_id in 1..=5 {
        answer_question(&mut session, question_id, ResponseLevel::Somewhat);
        if question_id < 5 {
            session.step(Step::Next).expect("question complete");
        }
    }

    assert_eq!(session.cursor(), 4);
    assert!(!session.can_advance());
    assert_eq!(
        session.step(Step::Next),
        Err(AssessmentError::AtLastQuestion)
    );
    assert_eq!(session.progress_pct(), 100);
    assert!(session.is_finished());
}

#[test]
fn finalize_reports_remaining_questions() {
    let mut session = session();
    answer_question(&mut session, 1, ResponseLevel::Yes);

    assert_eq!(
        session.finalize(),
        Err(AssessmentError::Unfinished { remaining: 4 })
    );
    assert_eq!(session.distribution(), Err(AssessmentError::ResultsPending));
}

#[test]
fn changing_an_answer_discards_calculated_results() {
    let mut session = session();
    answer_session(&mut session, vata_only);

    let result = session.finalize().expect("finished");
    assert_eq!(result.distribution.vata, 100);

    session.record(3, 0, ResponseLevel::Yes).expect("same answer");
    assert!(session.results().is_some());

    session.record(3, 1, ResponseLevel::Yes).expect("changed answer");
    assert!(session.results().is_none());
    assert_eq!(session.distribution(), Err(AssessmentError::ResultsPending));
}

#[test]
fn rejects_answers_outside_the_bank() {
    let mut session = session();

    assert_eq!(
        session.record(42, 0, ResponseLevel::Yes),
        Err(AssessmentError::UnknownQuestion(42))
    );
    assert_eq!(
        session.record(1, 3, ResponseLevel::Yes),
        Err(AssessmentError::UnknownCharacteristic {
            question_id: 1,
            index: 3
        })
    );
    assert!(session.answers().is_empty());
}

#[test]
fn dosha_comes_from_the_bank() {
    let mut session = session();
    session.record(4, 2, ResponseLevel::Yes).expect("recorded");

    let answer = session.answers().get(4, 2).expect("stored");
    assert_eq!(answer.dosha, Dosha::Kapha);
}

#[test]
fn question_without_characteristics_is_vacuously_complete() {
    let bank = QuestionBank::from_questions(vec![
        Question {
            id: 10,
            category: "Intro",
            prompt: "Ready to begin?",
            characteristics: Vec::new(),
        },
        Question {
            id: 11,
            category: "Sleep",
            prompt: "How do you sleep?",
            characteristics: vec![Characteristic {
                text: "Light and interrupted",
                dosha: Dosha::Vata,
            }],
        },
    ]);
    let mut session = AssessmentSession::new(SessionId("custom".to_string()), Arc::new(bank), None);

    assert!(session.is_complete(0));
    assert_eq!(session.step(Step::Next), Ok(1));
    assert!(!session.is_finished());
}

#[test]
fn empty_bank_is_finished_with_balanced_results() {
    let bank = Arc::new(QuestionBank::from_questions(Vec::new()));
    let mut session = AssessmentSession::new(SessionId("empty".to_string()), bank, None);

    assert_eq!(session.progress_pct(), 100);
    assert!(!session.is_complete(0));
    assert!(session.is_finished());

    let result = session.finalize().expect("nothing to answer");
    assert!(result.fallback);
}
