//! The idea entity, its lifecycle enums, and the commit audit trail.
//!
//! Wire names match the JSON the web client speaks: enums serialize as
//! their variant names (`"New"`, `"InProgress"`, ...) and commit fields use
//! camelCase (`statusChange`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle stage of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdeaStatus {
    New,
    InProgress,
    Completed,
}

impl IdeaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::New => "New",
            IdeaStatus::InProgress => "InProgress",
            IdeaStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(IdeaStatus::New),
            "InProgress" => Ok(IdeaStatus::InProgress),
            "Completed" => Ok(IdeaStatus::Completed),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// Urgency tag, chosen once at creation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(CoreError::UnknownPriority(other.to_string())),
        }
    }
}

/// One entry in an idea's audit trail.
///
/// Unrelated to version-control commits: a commit records the creation
/// event or a status transition, with an optional user comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "statusChange")]
    pub status_change: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Commit {
    /// The seed commit every idea is created with.
    pub fn creation(priority: Priority) -> Self {
        Self::creation_at(Utc::now(), priority)
    }

    pub fn creation_at(timestamp: DateTime<Utc>, priority: Priority) -> Self {
        Commit {
            timestamp,
            status_change: format!("Created with priority: {priority}"),
            comment: None,
        }
    }

    /// A status-transition commit. An empty comment is treated as absent,
    /// matching how the web client maps an empty prompt answer.
    pub fn status_change(status: IdeaStatus, comment: Option<&str>) -> Self {
        Self::status_change_at(Utc::now(), status, comment)
    }

    pub fn status_change_at(
        timestamp: DateTime<Utc>,
        status: IdeaStatus,
        comment: Option<&str>,
    ) -> Self {
        Commit {
            timestamp,
            status_change: format!("Status changed to: {status}"),
            comment: comment.filter(|c| !c.is_empty()).map(String::from),
        }
    }
}

/// The sole persisted entity: a tracked idea with its full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub text: String,
    pub status: IdeaStatus,
    pub priority: Priority,
    pub commits: Vec<Commit>,
}
