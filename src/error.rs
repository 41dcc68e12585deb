use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("period not found: {0}")]
    PeriodNotFound(String),

    #[error("invalid period identifier: {0}")]
    InvalidPeriod(String),

    #[error("duplicate period: {0}")]
    DuplicatePeriod(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("period document error: {0}")]
    PeriodDocument(String),

    #[error("refusing to overwrite: {0}")]
    WouldOverwrite(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
