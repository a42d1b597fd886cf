use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const QUESTION_FILE_VAR: &str = "SIMPLE_QUIZ_QUESTION_FILE";
pub const BIND_ADDRESS_VAR: &str = "SIMPLE_QUIZ_BIND_ADDRESS";
pub const RANDOM_SEED_VAR: &str = "SIMPLE_QUIZ_RANDOM_SEED";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub question_file: PathBuf,
    pub bind_address: SocketAddr,
    pub random_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let question_file: PathBuf = lookup(QUESTION_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .with_context(|| format!("{} must be set to the path of a question file", QUESTION_FILE_VAR))?
            .into();

        let address = lookup(BIND_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let bind_address: SocketAddr = address
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", BIND_ADDRESS_VAR, address))?;

        let random_seed = lookup(RANDOM_SEED_VAR)
            .map(|seed| {
                seed.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid {}: {:?}", RANDOM_SEED_VAR, seed))
            })
            .transpose()?;

        Ok(Config {
            question_file,
            bind_address,
            random_seed,
        })
    }

    /// Seeded when a seed is configured, so selections and shuffles can be replayed.
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
