use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::answers::AnswerSheet;
use super::bank::QuestionBank;
use super::carrier::{decode_profile, decode_scores};
use super::domain::{AssessmentError, Dosha, ResponseLevel, Step};
use super::profile::UserProfile;
use super::report::views::{ReportView, ResultView};
use super::report::{AssessmentReport, DocumentFormat};
use super::repository::{SessionStore, SessionStoreError};
use super::scoring::{aggregate, RawScores, ScoreDistribution};
use super::service::{AssessmentService, AssessmentServiceError};
use super::session::{AssessmentSession, SessionId, SessionStatusView};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerInput {
    pub question_id: u32,
    pub characteristic_index: usize,
    pub response: ResponseLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub raw: RawScores,
    pub distribution: ScoreDistribution,
    pub fallback: bool,
    pub finished: bool,
    pub result: ResultView,
}

/// Serialized carrier values as they arrive from the results step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierReportRequest {
    pub scores: String,
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub direction: Step,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    #[serde(default)]
    pub format: DocumentFormat,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedView {
    #[serde(flatten)]
    pub status: SessionStatusView,
    pub question: Option<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacteristicView {
    pub index: usize,
    pub text: &'static str,
    pub dosha: Dosha,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub id: u32,
    pub category: &'static str,
    pub prompt: &'static str,
    pub characteristics: Vec<CharacteristicView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseLevelView {
    pub value: ResponseLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionBankView {
    pub total_questions: usize,
    pub response_levels: Vec<ResponseLevelView>,
    pub questions: Vec<QuestionView>,
}

impl QuestionBankView {
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let answers = AnswerSheet::new();
        Self {
            total_questions: bank.len(),
            response_levels: ResponseLevel::ordered()
                .into_iter()
                .map(|level| ResponseLevelView {
                    value: level,
                    label: level.label(),
                    description: level.description(),
                    weight: level.weight(),
                })
                .collect(),
            questions: (0..bank.len())
                .filter_map(|position| question_view(bank, &answers, position))
                .collect(),
        }
    }
}

fn question_view(
    bank: &QuestionBank,
    answers: &AnswerSheet,
    position: usize,
) -> Option<QuestionView> {
    let question = bank.at(position)?;
    Some(QuestionView {
        position: position + 1,
        id: question.id,
        category: question.category,
        prompt: question.prompt,
        characteristics: question
            .characteristics
            .iter()
            .enumerate()
            .map(|(index, characteristic)| CharacteristicView {
                index,
                text: characteristic.text,
                dosha: characteristic.dosha,
                response: answers.get(question.id, index).map(|answer| answer.level),
            })
            .collect(),
    })
}

fn session_payload(session: &AssessmentSession) -> SessionCreatedView {
    SessionCreatedView {
        status: session.status_view(),
        question: question_view(session.bank(), session.answers(), session.cursor()),
    }
}

/// Router builder exposing the questionnaire, scoring, and report endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessment/score", post(score_handler::<S>))
        .route("/api/v1/assessment/report", post(carrier_report_handler))
        .route("/api/v1/assessment/sessions", post(start_handler::<S>))
        .route(
            "/api/v1/assessment/sessions/:session_id",
            get(status_handler::<S>).delete(discard_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/answers",
            put(answer_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/navigation",
            post(navigation_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/results",
            post(results_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/report",
            get(report_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/report/document",
            get(document_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: SessionStore + 'static,
{
    let view = QuestionBankView::from_bank(service.bank());
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    let bank = service.bank();
    let mut sheet = AnswerSheet::new();

    for input in request.answers {
        let dosha = match bank.dosha_for(input.question_id, input.characteristic_index) {
            Ok(dosha) => dosha,
            Err(error) => return error_response(error.into()),
        };
        sheet.record(
            input.question_id,
            input.characteristic_index,
            input.response,
            dosha,
        );
    }

    let result = aggregate(sheet.answers());
    let today = Local::now().date_naive();
    let report =
        AssessmentReport::new(result.distribution, None, today).with_fallback(result.fallback);

    let payload = ScoreResponse {
        raw: result.raw,
        distribution: result.distribution,
        fallback: result.fallback,
        finished: sheet.is_finished(bank),
        result: report.result_view(),
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn carrier_report_handler(
    axum::Json(request): axum::Json<CarrierReportRequest>,
) -> Response {
    let distribution = decode_scores(&request.scores);
    let profile: Option<UserProfile> = request.profile.as_deref().and_then(decode_profile);
    let report = AssessmentReport::new(distribution, profile, Local::now().date_naive());
    let view: ReportView = report.view();
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.start(profile) {
        Ok(session) => (StatusCode::CREATED, axum::Json(session_payload(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(session) => (StatusCode::OK, axum::Json(session_payload(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(input): axum::Json<AnswerInput>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.record(
        &id,
        input.question_id,
        input.characteristic_index,
        input.response,
    ) {
        Ok(session) => (StatusCode::OK, axum::Json(session_payload(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn navigation_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<NavigationRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.navigate(&SessionId(session_id), request.direction) {
        Ok(session) => (StatusCode::OK, axum::Json(session_payload(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.finalize(&SessionId(session_id), Local::now().date_naive()) {
        Ok(report) => (StatusCode::OK, axum::Json(report.result_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.report(&SessionId(session_id), Local::now().date_naive()) {
        Ok(report) => (StatusCode::OK, axum::Json(report.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn document_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    Query(query): Query<DocumentQuery>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.document(
        &SessionId(session_id),
        query.format,
        Local::now().date_naive(),
    ) {
        Ok(document) => {
            let disposition = format!("attachment; filename=\"{}\"", document.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn discard_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.discard(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Profile(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Assessment(
            AssessmentError::UnknownQuestion(_) | AssessmentError::UnknownCharacteristic { .. },
        ) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Assessment(_) => StatusCode::CONFLICT,
        AssessmentServiceError::Store(SessionStoreError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Store(SessionStoreError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Store(SessionStoreError::Unavailable(_)) => {
            warn!(%error, "session store unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = match &error {
        AssessmentServiceError::Profile(profile_error) => json!({
            "error": error.to_string(),
            "issues": profile_error.issues(),
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, axum::Json(payload)).into_response()
}
