pub mod idea_repo;

pub use idea_repo::IdeaRepo;
