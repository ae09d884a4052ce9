// src/controller/mod.rs
// =============================================================================
// Controllers own a piece of state and decide when it changes.
//
// Currently implements:
// - RepoListController: loads a repository list and publishes its LoadState
// =============================================================================

mod repo_list;

pub use repo_list::RepoListController;
