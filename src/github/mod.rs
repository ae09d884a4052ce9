// src/github/mod.rs
// =============================================================================
// This module talks to GitHub and provides data sources for repository lists.
//
// Currently implements:
// - RepoApiClient: GET /orgs/{org}/repos against the GitHub REST API
// - RepoRepository: the trait the controller loads repositories through
// - RepoDataRepository: the real, network-backed RepoRepository
// - MockRepoRepository: an offline RepoRepository serving fixture data
//
// Not implemented on purpose: authentication, pagination, caching, retries.
// =============================================================================

mod fetch;
mod repository;
#[cfg(test)]
pub(crate) mod stub;

pub use fetch::RepoApiClient;
pub use repository::{MockRepoRepository, RepoDataRepository, RepoRepository};
