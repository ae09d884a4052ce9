// src/lib.rs
// =============================================================================
// Library half of github-client. The binary in main.rs is a thin shell over
// these modules.
//
// Layering, bottom to top:
// - model, error, config: plain data
// - state: LoadState<T> and StatePublisher<T>, generic over any T
// - github: the HTTP client and the RepoRepository data sources
// - controller: RepoListController, which drives a load and publishes state
// - view: renders published state as terminal text
// =============================================================================

pub mod config;
pub mod controller;
pub mod error;
pub mod github;
pub mod model;
pub mod state;
pub mod view;
