use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatsError>;

/// Reasons a single group could not be seated.
///
/// Neither is fatal to a run: the caller moves on to the next request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("Invalid number of seats for group {group}: {requested} (minimum: 1 max: {max})")]
    InvalidPartySize {
        group: String,
        requested: usize,
        max: usize,
    },

    #[error("Could not assign seats for group {group}")]
    NoSeatsAvailable { group: String },
}

#[derive(Debug, Error)]
pub enum SeatsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request on line {row}: expected 2 fields, got {got}")]
    RequestRow { row: usize, got: usize },

    #[error("Invalid party size on line {row}: {value}")]
    PartySizeParse {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid ticket line {line}: {reason}")]
    TicketParse { line: usize, reason: String },
}

impl From<toml::de::Error> for SeatsError {
    fn from(err: toml::de::Error) -> Self {
        SeatsError::Config(format!("TOML parse error: {}", err))
    }
}
