use crate::{
    constants::{
        DEFAULT_OUTPUT_FILE, DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW, MAX_ROWS, MAX_WEIGHT,
        SAFETY_WEIGHT, SATISFACTION_WEIGHT,
    },
    error::{Result, SeatsError},
    planner::ScoreWeights,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

const ENV_OUTPUT_PATH: &str = "MOVIE_SEATS_OUTPUT";

/// Run configuration. Every field has a default so partial files are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub theater: TheaterConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TheaterConfig {
    pub rows: usize,
    pub seats_per_row: usize,
}

impl Default for TheaterConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub safety_weight: i64,
    pub satisfaction_weight: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            safety_weight: SAFETY_WEIGHT,
            satisfaction_weight: SATISFACTION_WEIGHT,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            safety: self.safety_weight,
            satisfaction: self.satisfaction_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Defaults, then the optional file, then the environment; validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeatsError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SeatsError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// `MOVIE_SEATS_OUTPUT` replaces the output path when set and not blank
    pub fn apply_env(&mut self) {
        if let Ok(output) = env::var(ENV_OUTPUT_PATH)
            && !output.trim().is_empty()
        {
            self.output.path = PathBuf::from(output);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let theater = &self.theater;
        if theater.rows < 1 || theater.rows > MAX_ROWS {
            return Err(SeatsError::Config(format!(
                "rows must be between 1 and {}, got {}",
                MAX_ROWS, theater.rows
            )));
        }
        if theater.seats_per_row < 1 {
            return Err(SeatsError::Config(
                "seats_per_row must be at least 1".to_string(),
            ));
        }

        let scoring = &self.scoring;
        for (name, weight) in [
            ("safety_weight", scoring.safety_weight),
            ("satisfaction_weight", scoring.satisfaction_weight),
        ] {
            if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(SeatsError::Config(format!(
                    "{name} must be between -{MAX_WEIGHT} and {MAX_WEIGHT}, got {weight}"
                )));
            }
        }

        // If the path already exists but is a directory, reject early.
        if self.output.path.is_dir() {
            return Err(SeatsError::Config(format!(
                "Output path is a directory: {}",
                self.output.path.display()
            )));
        }
        Ok(())
    }
}
