use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StatewiseError {
    #[error("invalid case type: {0}")]
    InvalidCaseType(String),

    #[error("feed request failed: {0}")]
    FeedHttp(String),

    #[error("feed returned status {status}: {message}")]
    FeedStatus { status: u16, message: String },

    #[error("feed response has no states_daily field")]
    MissingStatesDaily,

    #[error("malformed feed record: {0}")]
    MalformedRecord(String),

    #[error("feed contained no records")]
    EmptyFeed,

    #[error("case type {requested} not present in feed (available: {available})")]
    CaseTypeNotFound { requested: String, available: String },

    #[error("unknown state column in feed: {0}")]
    UnknownStateColumn(String),

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("csv write failed: {0}")]
    Csv(String),
}
