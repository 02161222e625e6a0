#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
