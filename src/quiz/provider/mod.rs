use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::quiz::definition::Question;
use crate::quiz::error::QuizError;
use crate::quiz::store::{QuestionStore, Selection};


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Shuffle {
    pub questions: bool,
    pub answers: bool,
}

/// Builds the question lists handed out to quiz takers.
#[derive(Debug)]
pub struct QuestionProvider {
    store: Arc<QuestionStore>,
    rng: Mutex<StdRng>,
}

impl QuestionProvider {
    pub fn new(store: Arc<QuestionStore>, rng: StdRng) -> Self {
        QuestionProvider {
            store,
            rng: Mutex::new(rng),
        }
    }

    pub fn available_count(&self) -> usize {
        self.store.available_count()
    }

    pub fn get_questions(
        &self,
        count: usize,
        selection: Selection,
        shuffle: Shuffle,
    ) -> Result<Vec<Question>, QuizError> {
        let mut questions = self.store.select(count, selection)?;
        if !shuffle.questions && !shuffle.answers {
            return Ok(questions);
        }

        // Questions are copies of the store's, shuffling them leaves the store untouched
        let mut rng = self.rng.lock();
        if shuffle.questions {
            questions.shuffle(&mut *rng);
        }
        if shuffle.answers {
            for question in questions.iter_mut() {
                question.answers.shuffle(&mut *rng);
            }
        }
        Ok(questions)
    }
}
