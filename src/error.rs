use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid TOML: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RaizError>;
