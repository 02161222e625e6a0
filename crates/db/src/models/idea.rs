//! Row mapping and request DTOs for the `ideas` table.

use ideaflow_core::{Commit, Idea, IdeaStatus, Priority};
use serde::Deserialize;
use sqlx::FromRow;

/// A raw row from the `ideas` table.
///
/// `status` and `priority` are stored as TEXT and `commits` as a serialized
/// JSON array; [`IdeaRow::try_into`] performs the decode into the domain
/// [`Idea`]. The decode must be lossless: commit ordering is insertion
/// order and survives every read/write round trip.
#[derive(Debug, Clone, FromRow)]
pub struct IdeaRow {
    pub id: i64,
    pub text: String,
    pub status: String,
    pub priority: String,
    pub commits: String,
}

impl TryFrom<IdeaRow> for Idea {
    type Error = sqlx::Error;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        let status: IdeaStatus = row
            .status
            .parse()
            .map_err(|e: ideaflow_core::CoreError| sqlx::Error::Decode(e.into()))?;
        let priority: Priority = row
            .priority
            .parse()
            .map_err(|e: ideaflow_core::CoreError| sqlx::Error::Decode(e.into()))?;
        let commits: Vec<Commit> =
            serde_json::from_str(&row.commits).map_err(|e| sqlx::Error::Decode(e.into()))?;

        Ok(Idea {
            id: row.id,
            text: row.text,
            status,
            priority,
            commits,
        })
    }
}

/// DTO for creating a new idea.
///
/// The client sends the seed commit list itself; the server persists it
/// as given. `status` and `priority` are typed, so malformed values are
/// rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIdea {
    pub text: String,
    pub status: IdeaStatus,
    pub priority: Priority,
    pub commits: Vec<Commit>,
}

/// DTO for updating an idea's status and commit history.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIdea {
    pub status: IdeaStatus,
    pub commits: Vec<Commit>,
}
