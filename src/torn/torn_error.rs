use thiserror::Error;

#[derive(Debug, Error)]
pub enum TornError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Bad JSON (HTTP {status}): {snippet}")]
    JsonParse { status: u16, snippet: String },
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}
