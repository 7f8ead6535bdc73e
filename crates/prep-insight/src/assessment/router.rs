use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{OptionLabel, QuestionOrder, ServedQuestion};
use super::service::AnalysisService;
use super::submission::RawAnswers;
use crate::llm::LanguageModel;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router<M: LanguageModel + 'static>(
    service: Arc<AnalysisService<M>>,
) -> Router {
    Router::new()
        .route("/api/v1/subjects", get(subjects_handler::<M>))
        .route("/api/v1/questions/:subject", get(questions_handler::<M>))
        .route("/api/v1/analyze", post(analyze_handler::<M>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct SubjectsResponse {
    pub(crate) subjects: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    pub(crate) shuffle: bool,
}

/// A question as served to the display layer: the canonical-index token the
/// client must echo back with its answer, the text, and the labelled
/// options. Never the correct answer.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) token: String,
    pub(crate) question: &'static str,
    pub(crate) options: BTreeMap<&'static str, &'static str>,
}

impl QuestionView {
    fn from_served(served: &ServedQuestion<'_>) -> Self {
        let options = OptionLabel::ordered()
            .into_iter()
            .map(|label| (label.label(), served.question.option_text(label)))
            .collect();
        Self {
            token: served.token.to_string(),
            question: served.question.text,
            options,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) questions: Vec<QuestionView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) user_answers: RawAnswers,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) analysis: String,
}

pub(crate) async fn subjects_handler<M: LanguageModel>(
    State(service): State<Arc<AnalysisService<M>>>,
) -> Json<SubjectsResponse> {
    Json(SubjectsResponse {
        subjects: service.bank().subject_names(),
    })
}

pub(crate) async fn questions_handler<M: LanguageModel>(
    State(service): State<Arc<AnalysisService<M>>>,
    Path(subject): Path<String>,
    Query(query): Query<QuestionsQuery>,
) -> Response {
    let order = if query.shuffle {
        QuestionOrder::Shuffled
    } else {
        QuestionOrder::Canonical
    };

    match service.bank().questions(&subject, order) {
        Ok(served) => {
            let questions = served.iter().map(QuestionView::from_served).collect();
            (StatusCode::OK, Json(QuestionsResponse { questions })).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analyze_handler<M: LanguageModel>(
    State(service): State<Arc<AnalysisService<M>>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let report = service.analyze(request.user_answers).await;
    Json(AnalyzeResponse {
        analysis: report.analysis,
    })
}
