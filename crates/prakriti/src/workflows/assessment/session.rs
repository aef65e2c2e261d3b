use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSheet;
use super::bank::QuestionBank;
use super::domain::{AssessmentError, Question, ResponseLevel, Step};
use super::profile::UserProfile;
use super::scoring::{aggregate, ScoreAggregate, ScoreDistribution};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    pub current_question: usize,
    pub question_id: Option<u32>,
    pub total_questions: usize,
    pub completed_questions: usize,
    pub answered_characteristics: usize,
    pub progress_pct: u8,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub finished: bool,
    pub results_ready: bool,
    pub has_profile: bool,
}

/// One user's pass through the questionnaire: profile, answers, wizard
/// position, and the distribution once it has been calculated.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: SessionId,
    bank: Arc<QuestionBank>,
    profile: Option<UserProfile>,
    answers: AnswerSheet,
    cursor: usize,
    results: Option<ScoreAggregate>,
    created_at: DateTime<Utc>,
}

impl AssessmentSession {
    pub fn new(id: SessionId, bank: Arc<QuestionBank>, profile: Option<UserProfile>) -> Self {
        Self {
            id,
            bank,
            profile,
            answers: AnswerSheet::new(),
            cursor: 0,
            results: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.at(self.cursor)
    }

    /// Records a response, taking the dosha from the bank. Changing an answer
    /// after results were calculated discards those results.
    pub fn record(
        &mut self,
        question_id: u32,
        characteristic_index: usize,
        level: ResponseLevel,
    ) -> Result<(), AssessmentError> {
        let dosha = self.bank.dosha_for(question_id, characteristic_index)?;
        let unchanged = self
            .answers
            .get(question_id, characteristic_index)
            .is_some_and(|existing| existing.level == level);

        self.answers
            .record(question_id, characteristic_index, level, dosha);
        if !unchanged {
            self.results = None;
        }

        Ok(())
    }

    pub fn is_complete(&self, question_index: usize) -> bool {
        self.answers.is_complete(&self.bank, question_index)
    }

    pub fn is_finished(&self) -> bool {
        self.answers.is_finished(&self.bank)
    }

    pub fn can_advance(&self) -> bool {
        self.cursor + 1 < self.bank.len() && self.is_complete(self.cursor)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Moves the wizard cursor, returning the new zero-based position.
    pub fn step(&mut self, step: Step) -> Result<usize, AssessmentError> {
        match step {
            Step::Next => {
                if self.cursor + 1 >= self.bank.len() {
                    return Err(AssessmentError::AtLastQuestion);
                }
                if !self.is_complete(self.cursor) {
                    let question_id = self.current_question().map_or(0, |question| question.id);
                    return Err(AssessmentError::QuestionIncomplete(question_id));
                }
                self.cursor += 1;
            }
            Step::Previous => {
                if self.cursor == 0 {
                    return Err(AssessmentError::AtFirstQuestion);
                }
                self.cursor -= 1;
            }
        }

        Ok(self.cursor)
    }

    pub fn progress_pct(&self) -> u8 {
        let total = self.bank.len();
        if total == 0 {
            return 100;
        }

        let reached = self.cursor + usize::from(self.is_complete(self.cursor));
        let pct = (reached * 200 + total) / (total * 2);
        pct.min(100) as u8
    }

    /// Calculates the distribution once every question is answered.
    pub fn finalize(&mut self) -> Result<ScoreAggregate, AssessmentError> {
        if !self.is_finished() {
            let remaining = self.bank.len() - self.answers.completed_questions(&self.bank);
            return Err(AssessmentError::Unfinished { remaining });
        }

        let result = aggregate(self.answers.answers());
        self.results = Some(result);
        Ok(result)
    }

    pub fn results(&self) -> Option<&ScoreAggregate> {
        self.results.as_ref()
    }

    pub fn distribution(&self) -> Result<ScoreDistribution, AssessmentError> {
        self.results
            .map(|result| result.distribution)
            .ok_or(AssessmentError::ResultsPending)
    }

    pub fn status_view(&self) -> SessionStatusView {
        SessionStatusView {
            session_id: self.id.clone(),
            created_at: self.created_at,
            current_question: self.cursor + 1,
            question_id: self.current_question().map(|question| question.id),
            total_questions: self.bank.len(),
            completed_questions: self.answers.completed_questions(&self.bank),
            answered_characteristics: self.answers.len(),
            progress_pct: self.progress_pct(),
            can_advance: self.can_advance(),
            can_go_back: self.can_go_back(),
            finished: self.is_finished(),
            results_ready: self.results.is_some(),
            has_profile: self.profile.is_some(),
        }
    }
}
