// src/model/mod.rs
// =============================================================================
// Data types decoded from the GitHub "list organization repositories" API.
//
// Submodules:
// - repo: The Repo and User records
// - mock: Fixed fixture repos used by --mock mode and by tests
// =============================================================================

mod mock;
mod repo;

pub use mock::mock_repos;
pub use repo::{Repo, RepoList, User};
