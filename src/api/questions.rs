use anyhow::anyhow;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiError, AppState};
use crate::quiz::definition::Question;
use crate::quiz::{QuizError, Selection, Shuffle};

const DEFAULT_COUNT: i64 = 10;

fn default_count() -> i64 {
    DEFAULT_COUNT
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsQuery {
    #[serde(default = "default_count")]
    count: i64,
    #[serde(default)]
    shuffle_questions: bool,
    #[serde(default)]
    shuffle_answers: bool,
}

#[derive(Debug, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

pub async fn question_count(State(state): State<AppState>) -> Json<usize> {
    Json(state.provider.available_count())
}

pub async fn fixed_questions(
    State(state): State<AppState>,
    query: Result<Query<QuestionsQuery>, QueryRejection>,
) -> Result<Json<Quiz>, ApiError> {
    let Query(query) = query.map_err(reject_query)?;
    get_questions(&state, &query, Selection::Fixed).map(Json)
}

pub async fn random_questions(
    State(state): State<AppState>,
    query: Result<Query<QuestionsQuery>, QueryRejection>,
) -> Result<Json<Quiz>, ApiError> {
    let Query(query) = query.map_err(reject_query)?;
    get_questions(&state, &query, Selection::Random).map(Json)
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

fn get_questions(
    state: &AppState,
    query: &QuestionsQuery,
    selection: Selection,
) -> Result<Quiz, ApiError> {
    if query.count <= 0 {
        return Err(ApiError::BadRequest(format!(
            "Question count must be positive, got {}",
            query.count
        )));
    }
    let count = usize::try_from(query.count)
        .map_err(|_| ApiError::BadRequest(format!("Invalid question count {}", query.count)))?;

    let shuffle = Shuffle {
        questions: query.shuffle_questions,
        answers: query.shuffle_answers,
    };
    debug!(
        "Serving {} questions ({:?} selection, {:?})",
        count, selection, shuffle
    );

    match state.provider.get_questions(count, selection, shuffle) {
        Ok(questions) => Ok(Quiz { questions }),
        Err(QuizError::NotEnoughQuestions {
            requested,
            available,
        }) => {
            let currently_available = state.provider.available_count();
            if requested > currently_available {
                Err(ApiError::BadRequest(format!(
                    "Requested {} questions but only {} are available",
                    requested, currently_available
                )))
            } else {
                Err(ApiError::Internal(anyhow!(
                    "Question selection failed for {} questions with {} available",
                    requested,
                    available
                )))
            }
        }
        Err(e) => Err(ApiError::Internal(e.into())),
    }
}
