//! Repository for the `ideas` table.

use crate::models::idea::{CreateIdea, IdeaRow, UpdateIdea};
use crate::DbPool;
use ideaflow_core::{Commit, Idea};

/// Column list for ideas queries.
const COLUMNS: &str = "id, text, status, priority, commits";

/// Provides CRUD operations for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// List every idea, commits decoded, in storage-native order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas");
        let rows = sqlx::query_as::<_, IdeaRow>(&query).fetch_all(pool).await?;

        rows.into_iter().map(Idea::try_from).collect()
    }

    /// Insert a new idea, returning the stored record with its assigned id.
    pub async fn insert(pool: &DbPool, input: &CreateIdea) -> Result<Idea, sqlx::Error> {
        let commits = encode_commits(&input.commits)?;
        let query = format!(
            "INSERT INTO ideas (text, status, priority, commits)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, IdeaRow>(&query)
            .bind(&input.text)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .bind(commits)
            .fetch_one(pool)
            .await?;

        Idea::try_from(row)
    }

    /// Overwrite an idea's status and commit history.
    ///
    /// A non-matching id is a silent no-op, mirroring the API contract
    /// where update of a missing idea is indistinguishable from success.
    pub async fn update(pool: &DbPool, id: i64, input: &UpdateIdea) -> Result<(), sqlx::Error> {
        let commits = encode_commits(&input.commits)?;
        sqlx::query("UPDATE ideas SET status = ?, commits = ? WHERE id = ?")
            .bind(input.status.as_str())
            .bind(commits)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove an idea. A non-matching id is a silent no-op.
    pub async fn delete(pool: &DbPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM ideas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

fn encode_commits(commits: &[Commit]) -> Result<String, sqlx::Error> {
    serde_json::to_string(commits).map_err(|e| sqlx::Error::Encode(e.into()))
}
