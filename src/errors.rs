#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid E.164 phone number: {0}")]
    InvalidPhone(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned non-JSON body (HTTP {status}): {excerpt}")]
    Decode { status: u16, excerpt: String },
}
