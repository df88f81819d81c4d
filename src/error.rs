use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodGenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Client error: {0}")]
    ClientError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for MoodGenError {
    fn from(err: std::io::Error) -> Self {
        MoodGenError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MoodGenError>;
