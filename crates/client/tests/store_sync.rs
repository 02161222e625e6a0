//! Tests for the client state store's synchronization rules.
//!
//! Uses a fake in-process API so every rule is checked without a server:
//! - one fetch on load replaces local state
//! - writes patch local state only after the API confirms
//! - failures leave local state exactly as it was
//! - unknown ids are silent no-ops with no network call
//! - history toggling and dashboard aggregation are purely local

use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use ideaflow_client::api::{IdeaApi, IdeaPatch, NewIdea};
use ideaflow_client::{ClientError, IdeaStore};
use ideaflow_core::{Idea, IdeaStatus, Priority};

// ---------------------------------------------------------------------------
// Fake API
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeApi {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    server: Vec<Idea>,
    fail: bool,
    calls: Vec<&'static str>,
}

impl FakeApi {
    fn failing() -> Self {
        let api = FakeApi::default();
        api.inner.lock().unwrap().fail = true;
        api
    }

    fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Failed".to_string(),
        }
    }
}

#[async_trait]
impl IdeaApi for &FakeApi {
    async fn fetch_all(&self) -> Result<Vec<Idea>, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("fetch_all");
        if inner.fail {
            return Err(FakeApi::error());
        }
        Ok(inner.server.clone())
    }

    async fn create(&self, draft: &NewIdea) -> Result<Idea, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("create");
        if inner.fail {
            return Err(FakeApi::error());
        }
        inner.next_id += 1;
        let idea = Idea {
            id: inner.next_id,
            text: draft.text.clone(),
            status: draft.status,
            priority: draft.priority,
            commits: draft.commits.clone(),
        };
        inner.server.push(idea.clone());
        Ok(idea)
    }

    async fn update(&self, id: i64, patch: &IdeaPatch) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("update");
        if inner.fail {
            return Err(FakeApi::error());
        }
        if let Some(idea) = inner.server.iter_mut().find(|i| i.id == id) {
            idea.status = patch.status;
            idea.commits = patch.commits.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("delete");
        if inner.fail {
            return Err(FakeApi::error());
        }
        inner.server.retain(|i| i.id != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_replaces_local_state_with_the_fetch_result() {
    let api = FakeApi::default();
    {
        let mut seed = IdeaStore::new(&api);
        seed.add_idea("pre-existing", Priority::Low).await.unwrap();
    }

    let mut store = IdeaStore::new(&api);
    store.load().await.unwrap();

    assert_eq!(store.ideas().len(), 1);
    assert_eq!(store.ideas()[0].text, "pre-existing");
}

#[tokio::test]
async fn failed_load_leaves_the_store_empty() {
    let api = FakeApi::failing();
    let mut store = IdeaStore::new(&api);

    assert!(store.load().await.is_err());
    assert!(store.ideas().is_empty());
}

// ---------------------------------------------------------------------------
// Add idea
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_idea_appends_the_server_echo() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);

    let id = store
        .add_idea("Build a treehouse", Priority::Medium)
        .await
        .unwrap()
        .id;

    let idea = store.get(id).unwrap();
    assert_eq!(idea.status, IdeaStatus::New);
    assert_eq!(idea.commits.len(), 1);
    assert!(idea.commits[0].status_change.contains("Medium"));
}

#[tokio::test]
async fn add_idea_rejects_blank_text_without_a_network_call() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);

    let result = store.add_idea("   ", Priority::High).await;

    assert_matches!(result, Err(ClientError::Invalid(_)));
    assert!(store.ideas().is_empty());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_add_leaves_state_unchanged() {
    let api = FakeApi::failing();
    let mut store = IdeaStore::new(&api);

    let result = store.add_idea("doomed", Priority::Low).await;

    assert!(result.is_err());
    assert!(store.ideas().is_empty());
}

// ---------------------------------------------------------------------------
// Change status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn change_status_patches_status_and_appends_a_commit() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);
    let id = store.add_idea("learn rust", Priority::High).await.unwrap().id;

    let changed = store
        .change_status(id, IdeaStatus::InProgress, Some("reading the book"))
        .await
        .unwrap();

    assert!(changed);
    let idea = store.get(id).unwrap();
    assert_eq!(idea.status, IdeaStatus::InProgress);
    assert_eq!(idea.commits.len(), 2);
    assert_eq!(
        idea.commits[1].comment.as_deref(),
        Some("reading the book")
    );
}

#[tokio::test]
async fn change_status_of_unknown_id_is_a_local_noop() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);

    let changed = store
        .change_status(42, IdeaStatus::Completed, None)
        .await
        .unwrap();

    assert!(!changed);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_change_status_leaves_local_state_unchanged() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);
    let id = store.add_idea("fragile", Priority::Low).await.unwrap().id;

    api.inner.lock().unwrap().fail = true;
    let result = store.change_status(id, IdeaStatus::Completed, None).await;

    assert!(result.is_err());
    let idea = store.get(id).unwrap();
    assert_eq!(idea.status, IdeaStatus::New);
    assert_eq!(idea.commits.len(), 1);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_the_idea_locally_on_success() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);
    let id = store.add_idea("gone soon", Priority::Low).await.unwrap().id;

    store.delete_idea(id).await.unwrap();

    assert!(store.get(id).is_none());
}

#[tokio::test]
async fn failed_delete_keeps_the_idea() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);
    let id = store.add_idea("survivor", Priority::Low).await.unwrap().id;

    api.inner.lock().unwrap().fail = true;
    let result = store.delete_idea(id).await;

    assert!(result.is_err());
    assert!(store.get(id).is_some());
}

// ---------------------------------------------------------------------------
// Local-only state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_history_keeps_at_most_one_panel_open() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);

    store.toggle_history(1);
    assert_eq!(store.expanded(), Some(1));

    // Toggling a different idea replaces the open panel.
    store.toggle_history(2);
    assert_eq!(store.expanded(), Some(2));

    // Toggling the same idea closes it.
    store.toggle_history(2);
    assert_eq!(store.expanded(), None);

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn status_counts_aggregates_the_local_list() {
    let api = FakeApi::default();
    let mut store = IdeaStore::new(&api);
    let a = store.add_idea("one", Priority::Low).await.unwrap().id;
    store.add_idea("two", Priority::Low).await.unwrap();
    store.add_idea("three", Priority::Low).await.unwrap();
    store
        .change_status(a, IdeaStatus::InProgress, None)
        .await
        .unwrap();

    let counts = store.status_counts();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].status, IdeaStatus::InProgress);
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].status, IdeaStatus::New);
    assert_eq!(counts[1].count, 2);
}
