use anyhow::{Context, Result};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::index;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::quiz::definition::{read_raw_questions, KeyedQuestion, Question, RawQuestion};
use crate::quiz::error::QuizError;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    Fixed,
    Random,
}

/// Questions loaded once at startup, along with the id of the correct answer to each of them.
/// Nothing here changes after construction except the state of the random source.
#[derive(Debug)]
pub struct QuestionStore {
    questions: Vec<Question>,
    answer_key: HashMap<String, String>,
    rng: Mutex<StdRng>,
}

impl QuestionStore {
    pub fn open(source: &Path, rng: StdRng) -> Result<QuestionStore> {
        let raw_questions = read_raw_questions(source)?;
        let store = QuestionStore::new(raw_questions, rng)
            .with_context(|| format!("Invalid question file {:?}", source))?;
        info!(
            "Loaded {} questions from {:?}",
            store.available_count(),
            source
        );
        Ok(store)
    }

    pub fn new(raw_questions: Vec<RawQuestion>, rng: StdRng) -> Result<QuestionStore> {
        let mut questions = Vec::with_capacity(raw_questions.len());
        let mut answer_key = HashMap::with_capacity(raw_questions.len());
        for raw_question in raw_questions {
            let keyed = KeyedQuestion::try_from(raw_question)?;
            answer_key.insert(keyed.question.id.clone(), keyed.correct_answer_id);
            questions.push(keyed.question);
        }
        Ok(QuestionStore {
            questions,
            answer_key,
            rng: Mutex::new(rng),
        })
    }

    pub fn available_count(&self) -> usize {
        self.questions.len()
    }

    /// Fixed selections are the first `count` questions in file order. Random selections sample `count`
    /// distinct questions and return them in random order.
    pub fn select(&self, count: usize, selection: Selection) -> Result<Vec<Question>, QuizError> {
        let available = self.available_count();
        if count > available {
            return Err(QuizError::NotEnoughQuestions {
                requested: count,
                available,
            });
        }

        let questions = match selection {
            Selection::Fixed => self.questions.iter().take(count).cloned().collect(),
            Selection::Random => {
                let mut rng = self.rng.lock();
                index::sample(&mut *rng, available, count)
                    .into_iter()
                    .map(|i| self.questions[i].clone())
                    .collect()
            }
        };
        Ok(questions)
    }

    pub fn correct_answer(&self, question_id: &str) -> Option<&str> {
        self.answer_key.get(question_id).map(String::as_str)
    }
}
