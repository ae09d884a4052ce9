// src/state/load_state.rs
// =============================================================================
// LoadState<T>: where an asynchronously loaded value currently is.
//
//   Idle ──start──▶ Loading ──ok──▶ Loaded(T)
//                      │
//                      └──err──▶ Failed(error)
//
// A Rust enum is closed, so a `match` without a wildcard arm is checked for
// exhaustiveness at compile time. Callers that add a fifth case later get a
// compile error everywhere the state is rendered.
//
// Rust concepts:
// - Generic enums: LoadState<T> works for a Vec<Repo>, a Vec<i64>, anything
// - Enum variants with data: Failed and Loaded carry a payload
// - Trait objects: Failed holds any error type behind dyn Error
// =============================================================================

use std::error::Error;
use std::sync::Arc;

/// Any error, shared so a LoadState stays cheap to clone and broadcast.
///
/// The state doesn't care what went wrong; callers that do can use
/// [`LoadState::error_as`] to get their concrete error type back.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub enum LoadState<T> {
    /// No load attempted yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch ended in an error
    Failed(SharedError),
    /// The last fetch succeeded
    Loaded(T),
}

// Written by hand: deriving Default would require T: Default
impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// True once a load attempt has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        self.is_failed() || self.is_loaded()
    }

    /// The loaded value, if there is one.
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            LoadState::Idle | LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    /// The error from the last attempt, if it failed.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            LoadState::Failed(error) => Some(error.as_ref()),
            LoadState::Idle | LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }

    /// The error from the last attempt, if it failed with an `E`.
    pub fn error_as<E: Error + 'static>(&self) -> Option<&E> {
        self.error().and_then(|error| error.downcast_ref::<E>())
    }

    /// Borrows the loaded value, like `Option::as_ref`.
    pub fn as_loaded_ref(&self) -> LoadState<&T> {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(error) => LoadState::Failed(error.clone()),
            LoadState::Loaded(value) => LoadState::Loaded(value),
        }
    }

    /// Transforms the loaded value, leaving every other case as it is.
    pub fn map<U, F>(self, f: F) -> LoadState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(error) => LoadState::Failed(error),
            LoadState::Loaded(value) => LoadState::Loaded(f(value)),
        }
    }
}
