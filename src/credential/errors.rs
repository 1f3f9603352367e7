/// Errors that can occur while building a credential
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("invalid <token>")]
    InvalidToken,
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
