// src/github/stub.rs
// =============================================================================
// A local stand-in for the GitHub API, used by tests.
//
// It binds 127.0.0.1 on a random port and answers every request with a fixed
// status and body, remembering what each request looked like.
// =============================================================================

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode as StubStatus, Uri},
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use super::RepoApiClient;
use crate::config::Settings;

pub const ONE_REPO: &str = r#"[{"id":1,"name":"repo-a","owner":{"name":"acme"},"description":"","stargazers_count":3}]"#;

/// What the stub server saw for one request
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct StubState {
    status: StubStatus,
    body: &'static str,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StubStatus, [(header::HeaderName, &'static str); 1], &'static str) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.seen.lock().unwrap().push(SeenRequest {
        path: uri.path().to_string(),
        accept: header_value(header::ACCEPT),
        user_agent: header_value(header::USER_AGENT),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Starts a GitHub API stand-in that answers every request with
/// `status` and `body`. Returns its base URL and the request log.
pub async fn spawn_stub_api(
    status: u16,
    body: &'static str,
) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status: StubStatus::from_u16(status).unwrap(),
        body,
        seen: seen.clone(),
    };
    let app = Router::new().fallback(stub_handler).with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), seen)
}

/// A client for `base_url` that never goes through a proxy, so tests reach
/// the local stub without touching the process environment.
pub fn client_for(base_url: &str) -> RepoApiClient {
    let settings = Settings::default()
        .with_overrides(Some(base_url), None)
        .unwrap();
    let http = reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .no_proxy()
        .build()
        .unwrap();
    RepoApiClient::with_http(http, &settings)
}
