use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::quiz::error::QuizError;
use crate::quiz::store::QuestionStore;


#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct QuestionResponse {
    #[serde(rename = "question", default)]
    pub question_id: Option<String>,
    #[serde(rename = "answer", default)]
    pub answer_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Score {
    #[serde(rename = "correct")]
    pub correct_count: usize,
    #[serde(rename = "total")]
    pub total_count: usize,
    #[serde(rename = "percent")]
    pub percentage_correct: f64,
}

#[derive(Debug)]
pub struct ScoreCalculator {
    store: Arc<QuestionStore>,
}

impl ScoreCalculator {
    pub fn new(store: Arc<QuestionStore>) -> Self {
        ScoreCalculator { store }
    }

    pub fn calculate(&self, responses: &[QuestionResponse]) -> Result<Score, QuizError> {
        if responses.is_empty() {
            return Err(QuizError::NoResponses);
        }
        let correct_count = responses.iter().filter(|r| self.is_correct(r)).count();
        let total_count = responses.len();
        Ok(Score {
            correct_count,
            total_count,
            percentage_correct: correct_count as f64 / total_count as f64,
        })
    }

    // Missing ids and unknown questions never match
    fn is_correct(&self, response: &QuestionResponse) -> bool {
        let expected = response
            .question_id
            .as_deref()
            .and_then(|id| self.store.correct_answer(id));
        match (expected, response.answer_id.as_deref()) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}
