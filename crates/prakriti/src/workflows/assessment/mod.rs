//! Prakriti questionnaire: question bank, answer capture, scoring, and the
//! constitution report built from the resulting dosha distribution.

pub mod answers;
pub mod bank;
pub mod carrier;
pub mod domain;
pub mod import;
pub mod profile;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerKey, AnswerSheet};
pub use bank::QuestionBank;
pub use domain::{AssessmentError, Characteristic, Dosha, Question, ResponseLevel, Step};
pub use import::{AnswerImportError, AnswerImporter};
pub use profile::{FieldIssue, Gender, ProfileError, UserProfile};
pub use report::{
    document_file_name, guidance_for, render_document, traits_for, AssessmentReport,
    DocumentFormat, DoshaTraits, PairGuidance, Recommendations, ReportDocument,
};
pub use repository::{SessionStore, SessionStoreError};
pub use router::assessment_router;
pub use scoring::{aggregate, Constitution, RawScores, ScoreAggregate, ScoreDistribution};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{AssessmentSession, SessionId, SessionStatusView};
