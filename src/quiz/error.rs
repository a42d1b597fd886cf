use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Not enough questions available: requested {requested}, available {available}")]
    NotEnoughQuestions { requested: usize, available: usize },
    #[error("Cannot compute a score without any responses")]
    NoResponses,
}
