use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod question;


pub use question::{KeyedQuestion, Question, RawQuestion};

pub fn read_raw_questions(source: &Path) -> Result<Vec<RawQuestion>> {
    let file = File::open(source)
        .with_context(|| format!("Could not open question file {:?}", source))?;
    let raw_questions: Vec<RawQuestion> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse question file {:?}", source))?;
    Ok(raw_questions)
}
