use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the chat client. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, DNS or transport-level timeout
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend replied outside 200-299
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Body was not JSON or had no `response` field
    #[error("failed to decode backend response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Empty `message` or `prompt`, caught before sending
    #[error("`{0}` must not be empty")]
    EmptyInput(&'static str),

    /// Base address is not an http(s) URL
    #[error("invalid base url: {0}")]
    Config(String),
}
