use std::{env, str::FromStr};

/// Demo settings, see [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of game results to draw.
    pub rounds: usize,
    /// Number of workers updating the shared counter.
    pub workers: usize,
    /// Upper bound, inclusive, of a single worker increment.
    pub max_increment: i32,
    /// Seed for reproducible runs, random when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: 1000,
            workers: 3,
            max_increment: 2,
            seed: None,
        }
    }
}

impl Config {
    /// Read overrides from `OPTPAIR_ROUNDS`, `OPTPAIR_WORKERS`, `OPTPAIR_MAX_INCREMENT` and
    /// `OPTPAIR_SEED`.
    ///
    /// Invalid values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(rounds) = parse_var("OPTPAIR_ROUNDS") {
            config.rounds = rounds;
        }
        if let Some(workers) = parse_var("OPTPAIR_WORKERS") {
            config.workers = workers;
        }
        if let Some(max) = parse_var::<i32>("OPTPAIR_MAX_INCREMENT") {
            if max < 0 {
                log::warn!("ignoring negative OPTPAIR_MAX_INCREMENT={max}");
            } else {
                config.max_increment = max;
            }
        }
        if let Some(seed) = parse_var("OPTPAIR_SEED") {
            config.seed = Some(seed);
        }
        config
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring invalid {name}={raw:?}");
            None
        }
    }
}
