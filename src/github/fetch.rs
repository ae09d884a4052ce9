// src/github/fetch.rs
// =============================================================================
// This module fetches an organization's repository list from the GitHub API.
//
// Strategy:
// - Build `{api_base}/orgs/{org}/repos` from the configured base URL
// - Ask for the v3 JSON media type via the Accept header
// - Treat anything other than 200 OK as a failure, whatever the body says
// - Read the whole body, then decode it into Vec<Repo>
//
// Each call is exactly one request. Nothing is cached between calls, and the
// request timeout is whatever reqwest uses by default.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: Every failure becomes a FetchError the caller can match on
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::config::Settings;
use crate::error::FetchError;
use crate::model::RepoList;

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct RepoApiClient {
    http: Client,
    base_url: Url,
}

impl RepoApiClient {
    /// Creates a client for the API at `settings.api_base_url`.
    ///
    /// GitHub refuses requests without a User-Agent, so one is always set.
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
        })
    }

    /// Uses a prebuilt reqwest client, e.g. one with proxies turned off.
    #[cfg(test)]
    pub(crate) fn with_http(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            base_url: settings.api_base_url.clone(),
        }
    }

    /// The "list repositories" endpoint for `org`.
    ///
    /// The org is added as a path segment, so characters like `/` or `?` are
    /// escaped instead of changing the request.
    pub fn repos_url(&self, org: &str) -> Url {
        let mut url = self.base_url.clone();
        // Settings rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&["orgs", org, "repos"]);
        }
        url
    }

    /// Fetches the repositories of `org`, in the order the server lists them.
    pub async fn list_org_repos(&self, org: &str) -> Result<RepoList, FetchError> {
        let url = self.repos_url(org);
        debug!(%url, "requesting repository list");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_V3_JSON)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let repos: RepoList = serde_json::from_slice(&body)?;

        debug!(count = repos.len(), "decoded repository list");
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::stub::{client_for, spawn_stub_api, ONE_REPO};
    use tokio::net::TcpListener;

    #[test]
    fn test_new_builds_from_settings() {
        let client = RepoApiClient::new(&Settings::default()).unwrap();
        assert_eq!(
            client.repos_url("apple").as_str(),
            "https://api.github.com/orgs/apple/repos"
        );
    }

    #[test]
    fn test_repos_url() {
        let client = client_for("https://api.github.com");
        assert_eq!(
            client.repos_url("apple").as_str(),
            "https://api.github.com/orgs/apple/repos"
        );
    }

    #[test]
    fn test_repos_url_keeps_base_path_and_escapes_org() {
        let client = client_for("https://ghe.example.com/api/v3/");
        assert_eq!(
            client.repos_url("a/b").as_str(),
            "https://ghe.example.com/api/v3/orgs/a%2Fb/repos"
        );
    }

    #[tokio::test]
    async fn test_list_org_repos_sends_expected_request() {
        let (base_url, seen) = spawn_stub_api(200, ONE_REPO).await;
        let client = client_for(&base_url);

        let repos = client.list_org_repos("acme").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "repo-a");
        assert_eq!(repos[0].owner.name, "acme");
        assert_eq!(repos[0].stargazers_count, 3);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/orgs/acme/repos");
        assert_eq!(seen[0].accept.as_deref(), Some(GITHUB_V3_JSON));
        assert!(seen[0]
            .user_agent
            .as_deref()
            .unwrap_or_default()
            .starts_with("github-client/"));
    }

    #[tokio::test]
    async fn test_list_org_repos_keeps_server_order() {
        let body = r#"[
            {"id":3,"name":"c","owner":{"name":"o"},"description":"","stargazers_count":0},
            {"id":1,"name":"a","owner":{"name":"o"},"description":"","stargazers_count":0},
            {"id":2,"name":"b","owner":{"name":"o"},"description":"","stargazers_count":0}
        ]"#;
        let (base_url, _) = spawn_stub_api(200, body).await;

        let repos = client_for(&base_url).list_org_repos("o").await.unwrap();
        let ids: Vec<u64> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_non_200_is_a_status_error() {
        // Even a 2xx that isn't 200, with a perfectly valid body
        for status in [201, 404, 500] {
            let (base_url, _) = spawn_stub_api(status, ONE_REPO).await;
            let err = client_for(&base_url)
                .list_org_repos("acme")
                .await
                .unwrap_err();
            assert!(
                matches!(err, FetchError::Status(s) if s.as_u16() == status),
                "status {status}: {err}"
            );
        }
    }

    #[tokio::test]
    async fn test_bad_body_is_a_decode_error() {
        let (base_url, _) = spawn_stub_api(200, r#"{"message":"not a list"}"#).await;
        let err = client_for(&base_url)
            .list_org_repos("acme")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Grab a free port, then close it again so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}"))
            .list_org_repos("acme")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
