//! Domain types and pure logic for the idea tracker.
//!
//! No I/O lives here: the persistence layer (`ideaflow-db`), the HTTP
//! service (`ideaflow-api`) and the client (`ideaflow-client`) all build
//! on the types in this crate.

pub mod dashboard;
pub mod error;
pub mod idea;

pub use error::CoreError;
pub use idea::{Commit, Idea, IdeaStatus, Priority};
