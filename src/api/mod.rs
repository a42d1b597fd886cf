use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::quiz::{QuestionProvider, QuestionStore, ScoreCalculator};

mod error;
mod questions;
mod scoring;


pub use self::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<QuestionProvider>,
    pub calculator: Arc<ScoreCalculator>,
}

impl AppState {
    pub fn new(store: Arc<QuestionStore>, provider: QuestionProvider) -> Self {
        AppState {
            provider: Arc::new(provider),
            calculator: Arc::new(ScoreCalculator::new(store)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let questions = Router::new()
        .route("/count", get(questions::question_count))
        .route("/fixed", get(questions::fixed_questions))
        .route("/random", get(questions::random_questions));

    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .nest("/questions", questions)
                .route("/scoring", post(scoring::calculate_score)),
        )
        .with_state(state)
}
