// src/error.rs
// =============================================================================
// Errors that can end a fetch attempt.
//
// There are three ways loading the repository list can fail:
// - Transport: no response at all (DNS, connection refused, TLS, ...)
// - Status: the server answered, but not with 200 OK
// - Decode: the body was not the JSON shape we expect
//
// The controller never lets these escape; it turns them into a
// LoadState::Failed that the view renders as a generic message.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("could not decode repository list: {0}")]
    Decode(#[from] serde_json::Error),
}
