//! Client for the ideaflow API: HTTP transport, the in-memory idea store,
//! and the terminal view layer used by the `ideaflow` binary.
//!
//! The store is the single writer over its idea list. It is populated by
//! one fetch on load and patched optimistically afterwards: a local change
//! is applied only once the server confirms the corresponding write.

pub mod api;
pub mod error;
pub mod prompt;
pub mod store;
pub mod view;

pub use api::{HttpIdeaApi, IdeaApi};
pub use error::ClientError;
pub use store::IdeaStore;
