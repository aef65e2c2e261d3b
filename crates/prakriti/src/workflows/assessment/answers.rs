use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::domain::{Dosha, ResponseLevel};

/// Position of a single characteristic inside the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswerKey {
    pub question_id: u32,
    pub characteristic_index: usize,
}

impl AnswerKey {
    pub const fn new(question_id: u32, characteristic_index: usize) -> Self {
        Self {
            question_id,
            characteristic_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub level: ResponseLevel,
    pub dosha: Dosha,
}

/// Answers collected during one assessment. Entries are inserted or
/// overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<AnswerKey, Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        question_id: u32,
        characteristic_index: usize,
        level: ResponseLevel,
        dosha: Dosha,
    ) {
        self.answers.insert(
            AnswerKey::new(question_id, characteristic_index),
            Answer { level, dosha },
        );
    }

    pub fn get(&self, question_id: u32, characteristic_index: usize) -> Option<&Answer> {
        self.answers
            .get(&AnswerKey::new(question_id, characteristic_index))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &Answer)> {
        self.answers.iter()
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    /// True when every characteristic of the question at `question_index`
    /// (zero-based) has an answer. Questions without characteristics are
    /// vacuously complete; positions outside the bank never are.
    pub fn is_complete(&self, bank: &QuestionBank, question_index: usize) -> bool {
        let Some(question) = bank.at(question_index) else {
            return false;
        };

        (0..question.characteristics.len())
            .all(|index| self.answers.contains_key(&AnswerKey::new(question.id, index)))
    }

    pub fn completed_questions(&self, bank: &QuestionBank) -> usize {
        (0..bank.len())
            .filter(|index| self.is_complete(bank, *index))
            .count()
    }

    pub fn is_finished(&self, bank: &QuestionBank) -> bool {
        self.completed_questions(bank) == bank.len()
    }
}

impl FromIterator<(AnswerKey, Answer)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (AnswerKey, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
