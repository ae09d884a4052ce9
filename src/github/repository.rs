// src/github/repository.rs
// =============================================================================
// Data sources the controller loads repositories from.
//
// RepoRepository is the seam between "what the app shows" and "where the data
// comes from". The controller only ever sees this trait, which is what lets
// tests hand it a stub and lets --mock mode run without a network.
//
// Rust concepts:
// - Traits: A shared interface with several implementations
// - async_trait: Lets a trait have async methods and still be used as
//   Box<dyn RepoRepository>
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::RepoApiClient;
use crate::error::FetchError;
use crate::model::{mock_repos, RepoList};

#[async_trait]
pub trait RepoRepository: Send + Sync {
    /// Loads the full repository list. One call, one fetch: no caching.
    async fn fetch_repos(&self) -> Result<RepoList, FetchError>;
}

// Lets main.rs pick a data source at runtime and still hand the controller
// a single concrete type
#[async_trait]
impl<R: RepoRepository + ?Sized> RepoRepository for Box<R> {
    async fn fetch_repos(&self) -> Result<RepoList, FetchError> {
        (**self).fetch_repos().await
    }
}

/// Repositories of one organization, straight from the GitHub API.
#[derive(Debug, Clone)]
pub struct RepoDataRepository {
    client: RepoApiClient,
    org: String,
}

impl RepoDataRepository {
    pub fn new(client: RepoApiClient, org: impl Into<String>) -> Self {
        Self {
            client,
            org: org.into(),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }
}

#[async_trait]
impl RepoRepository for RepoDataRepository {
    async fn fetch_repos(&self) -> Result<RepoList, FetchError> {
        self.client.list_org_repos(&self.org).await
    }
}

/// Serves the fixture repos after a fake network delay.
#[derive(Debug, Clone)]
pub struct MockRepoRepository {
    delay: Duration,
}

impl MockRepoRepository {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RepoRepository for MockRepoRepository {
    async fn fetch_repos(&self) -> Result<RepoList, FetchError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "serving mock repositories");
        tokio::time::sleep(self.delay).await;
        Ok(mock_repos())
    }
}
