//! The in-memory idea store: the client's single source of truth between
//! server round trips.

use ideaflow_core::dashboard::{status_counts, StatusCount};
use ideaflow_core::{Commit, Idea, IdeaStatus, Priority};

use crate::api::{IdeaApi, IdeaPatch, NewIdea};
use crate::error::ClientError;

/// Explicitly owned, single-writer state container for the view layer.
///
/// Populated by one [`load`](IdeaStore::load) on startup; every mutation is
/// optimistic in the sense that local state is patched only after the server
/// confirms the write. A failed call leaves the list exactly as it was.
/// There is no in-flight guard: two rapid writes to the same idea race, and
/// the last response to resolve wins locally.
pub struct IdeaStore<A: IdeaApi> {
    api: A,
    ideas: Vec<Idea>,
    expanded: Option<i64>,
}

impl<A: IdeaApi> IdeaStore<A> {
    pub fn new(api: A) -> Self {
        IdeaStore {
            api,
            ideas: Vec::new(),
            expanded: None,
        }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, id: i64) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Id of the idea whose history panel is open, if any.
    pub fn expanded(&self) -> Option<i64> {
        self.expanded
    }

    /// Replace the local list with a fresh fetch-all. Called once on load;
    /// there is no retry, polling or live refresh.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.ideas = self.api.fetch_all().await?;
        Ok(())
    }

    /// Create an idea from free text and a chosen priority.
    ///
    /// The draft is forced to status New with a single seed commit. On
    /// success the server's echo (carrying the authoritative id) is appended
    /// to local state; on failure the list is untouched.
    pub async fn add_idea(&mut self, text: &str, priority: Priority) -> Result<&Idea, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::Invalid("idea text must not be empty".into()));
        }

        let draft = NewIdea {
            text: text.to_string(),
            status: IdeaStatus::New,
            priority,
            commits: vec![Commit::creation(priority)],
        };
        let created = self.api.create(&draft).await?;
        self.ideas.push(created);

        Ok(self.ideas.last().expect("just pushed"))
    }

    /// Move an idea to a new status, appending a commit (with the optional,
    /// already-collected comment) to its history.
    ///
    /// Returns `Ok(false)` without any network call when the id is not in
    /// local state. Local status and commits are overwritten only after the
    /// server acknowledges the update.
    pub async fn change_status(
        &mut self,
        id: i64,
        new_status: IdeaStatus,
        comment: Option<&str>,
    ) -> Result<bool, ClientError> {
        let Some(idea) = self.get(id) else {
            return Ok(false);
        };

        let mut commits = idea.commits.clone();
        commits.push(Commit::status_change(new_status, comment));

        self.api
            .update(
                id,
                &IdeaPatch {
                    status: new_status,
                    commits: commits.clone(),
                },
            )
            .await?;

        if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
            idea.status = new_status;
            idea.commits = commits;
        }

        Ok(true)
    }

    /// Delete an idea. Removed from local state only once the server
    /// confirms; a failed call leaves it present.
    pub async fn delete_idea(&mut self, id: i64) -> Result<(), ClientError> {
        self.api.delete(id).await?;
        self.ideas.retain(|idea| idea.id != id);
        if self.expanded == Some(id) {
            self.expanded = None;
        }
        Ok(())
    }

    /// Toggle an idea's history panel. At most one panel is open at a time;
    /// purely local, no network call.
    pub fn toggle_history(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Dashboard aggregation over the current local list.
    pub fn status_counts(&self) -> Vec<StatusCount> {
        status_counts(&self.ideas)
    }
}
