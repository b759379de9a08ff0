use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown section key: {0}")]
    UnknownSection(String),
    #[error("invalid chart date '{value}': {source}")]
    InvalidChartDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
