//! The API seam and its reqwest-backed implementation.

use async_trait::async_trait;
use ideaflow_core::{Commit, Idea, IdeaStatus, Priority};
use serde::Serialize;

use crate::error::ClientError;

/// Request body for `POST /api/ideas`: a client-built draft idea.
#[derive(Debug, Clone, Serialize)]
pub struct NewIdea {
    pub text: String,
    pub status: IdeaStatus,
    pub priority: Priority,
    pub commits: Vec<Commit>,
}

/// Request body for `PUT /api/ideas/{id}`: the new status plus the full
/// commit history including the freshly appended entry.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaPatch {
    pub status: IdeaStatus,
    pub commits: Vec<Commit>,
}

/// The four operations the backend exposes.
///
/// A trait seam so the store can be exercised in tests without a server.
#[async_trait]
pub trait IdeaApi {
    async fn fetch_all(&self) -> Result<Vec<Idea>, ClientError>;
    async fn create(&self, draft: &NewIdea) -> Result<Idea, ClientError>;
    async fn update(&self, id: i64, patch: &IdeaPatch) -> Result<(), ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// HTTP implementation of [`IdeaApi`] against a running ideaflow server.
pub struct HttpIdeaApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpIdeaApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpIdeaApi {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Map a non-success response to [`ClientError::Api`], pulling the server's
/// `{"error": ...}` message out when the body parses.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error")?.as_str().map(String::from))
        .unwrap_or_else(|| format!("HTTP {status}"));

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl IdeaApi for HttpIdeaApi {
    async fn fetch_all(&self) -> Result<Vec<Idea>, ClientError> {
        let response = self.http.get(self.url("/api/ideas")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, draft: &NewIdea) -> Result<Idea, ClientError> {
        let response = self
            .http
            .post(self.url("/api/ideas"))
            .json(draft)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, id: i64, patch: &IdeaPatch) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/ideas/{id}")))
            .json(patch)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/ideas/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
