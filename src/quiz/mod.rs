pub mod definition;
pub mod error;
pub mod provider;
pub mod score;
pub mod store;

pub use self::error::QuizError;
pub use self::provider::{QuestionProvider, Shuffle};
pub use self::score::{QuestionResponse, Score, ScoreCalculator};
pub use self::store::{QuestionStore, Selection};
