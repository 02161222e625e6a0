//! Shared response types for API handlers.

use serde::Serialize;

/// Generic `{ "message": ... }` acknowledgement for update and delete,
/// which do not echo the affected record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
