#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or protocol failure talking to the API.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Input rejected before any network call was made.
    #[error("Validation failed: {0}")]
    Invalid(String),
}
