use thiserror::Error;

/// Errors returned by the sentiment classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status (bad key, quota, ...).
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model produced no usable text, e.g. the prompt was blocked.
    #[error("Gemini returned no text: {0}")]
    EmptyResponse(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The configured base URL or model name does not form a valid URL.
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
