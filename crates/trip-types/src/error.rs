use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TripError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend answered with a shape that does not match the documented schema
    #[error("Response mapping error: {0}")]
    Mapping(String),

    #[error("Realtime channel error: {0}")]
    Channel(String),

    #[error("Chat backend error: {0}")]
    Chat(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for TripError {
    fn from(e: serde_json::Error) -> Self {
        TripError::Serialization(e.to_string())
    }
}
