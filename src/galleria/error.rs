use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleriaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GalleriaError>;
