use thiserror::Error;

#[derive(Debug, Error)]
pub enum GspApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not load key material: {0}")]
    KeyError(String),
    #[error("Could not encrypt message: {0}")]
    EncryptionError(String),
    #[error("Could not decrypt message: {0}")]
    DecryptionError(String),
    #[error("Invalid transport encoding: {0}")]
    EncodingError(String),
    #[error("Could not send request: {0}")]
    RequestError(String),
    #[error("Invalid response: {0}")]
    ResponseError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Could not serialize JSON: {0}")]
    JsonError(String),
}
