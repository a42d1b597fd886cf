use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::api::{ApiError, AppState};
use crate::quiz::{QuestionResponse, Score};

#[derive(Debug, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub responses: Option<Vec<QuestionResponse>>,
}

pub async fn calculate_score(
    State(state): State<AppState>,
    body: Result<Json<QuizResponse>, JsonRejection>,
) -> Result<Json<Score>, ApiError> {
    let Json(quiz_response) =
        body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let responses = match quiz_response.responses {
        Some(responses) if !responses.is_empty() => responses,
        _ => return Err(ApiError::BadRequest("No responses submitted".to_owned())),
    };

    let score = state
        .calculator
        .calculate(&responses)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    debug!(
        "Scored {}/{} correct answers",
        score.correct_count, score.total_count
    );
    Ok(Json(score))
}
