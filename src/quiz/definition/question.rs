use anyhow::{anyhow, Context, Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    #[serde(rename = "possibleAnswers")]
    pub possible_answers: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// One selectable choice for a question. The id is only unique among the options of its question.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub question_text: String,
    pub answers: Vec<AnswerOption>,
}

/// A freshly converted question along with the id of its correct answer.
#[derive(Clone, Debug)]
pub struct KeyedQuestion {
    pub question: Question,
    pub correct_answer_id: String,
}

impl TryFrom<RawQuestion> for KeyedQuestion {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        if raw_question.possible_answers.is_empty() {
            return Err(anyhow!(
                "Question {:?} has no possible answers",
                raw_question.question
            ));
        }

        let answers: Vec<AnswerOption> = raw_question
            .possible_answers
            .into_iter()
            .map(|text| AnswerOption {
                id: generate_id(),
                text,
            })
            .collect();

        let correct_answer_id = answers
            .iter()
            .find(|a| a.text == raw_question.correct_answer)
            .map(|a| a.id.clone())
            .with_context(|| {
                format!(
                    "Correct answer {:?} of question {:?} is not one of its possible answers",
                    raw_question.correct_answer, raw_question.question
                )
            })?;

        Ok(KeyedQuestion {
            question: Question {
                id: generate_id(),
                question_text: raw_question.question,
                answers,
            },
            correct_answer_id,
        })
    }
}
