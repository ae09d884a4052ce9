// src/controller/repo_list.rs
// =============================================================================
// RepoListController: runs one repository-list fetch at a time and publishes
// its progress as a LoadState<RepoList>.
//
// How a load goes:
// 1. start()/retry() publishes Loading right away
// 2. One fetch is spawned onto the tokio runtime
// 3. When it finishes, Loaded(repos) or Failed(error) is published
//
// Calling start() while a fetch is still running cancels that fetch and
// starts a new one. Every fetch carries a generation number, and only the
// newest generation is allowed to publish, so a superseded fetch can never
// overwrite a newer state.
//
// Errors never leave the controller: they become LoadState::Failed.
// There is no automatic retry; the user has to ask for one.
// =============================================================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

use crate::github::RepoRepository;
use crate::model::RepoList;
use crate::state::{LoadState, SharedError, StatePublisher, StateSubscription};

pub struct RepoListController<R> {
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    repository: R,
    publisher: StatePublisher<RepoList>,
    active: Mutex<ActiveFetch>,
}

#[derive(Default)]
struct ActiveFetch {
    generation: u64,
    task: Option<AbortHandle>,
}

impl<R> Inner<R> {
    fn lock_active(&self) -> MutexGuard<'_, ActiveFetch> {
        // The guarded data is two plain fields; a panic can't leave it torn
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: RepoRepository + 'static> Inner<R> {
    async fn run_fetch(&self, generation: u64) {
        let state = match self.repository.fetch_repos().await {
            Ok(repos) => {
                info!(generation, count = repos.len(), "loaded repositories");
                LoadState::Loaded(repos)
            }
            Err(err) => {
                warn!(generation, error = %err, "failed to load repositories");
                let error: SharedError = Arc::new(err);
                LoadState::Failed(error)
            }
        };

        let mut active = self.lock_active();
        if active.generation != generation {
            debug!(generation, current = active.generation, "dropping superseded fetch result");
            return;
        }
        active.task = None;
        self.publisher.publish(state);
    }
}

impl<R: RepoRepository + 'static> RepoListController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                publisher: StatePublisher::default(),
                active: Mutex::new(ActiveFetch::default()),
            }),
        }
    }

    /// Loads the list. Call it when the list first becomes visible.
    ///
    /// Publishes `Loading` before returning, then fetches in the background.
    /// The returned handle resolves once the fetch has published its result;
    /// awaiting it is optional. Must be called from inside a tokio runtime.
    pub fn start(&self) -> JoinHandle<()> {
        self.load()
    }

    /// Loads the list again, whatever happened last time.
    pub fn retry(&self) -> JoinHandle<()> {
        debug!("retry requested");
        self.load()
    }

    pub fn on_appear(&self) -> JoinHandle<()> {
        self.start()
    }

    pub fn on_retry(&self) -> JoinHandle<()> {
        self.retry()
    }

    fn load(&self) -> JoinHandle<()> {
        let mut active = self.inner.lock_active();

        if let Some(task) = active.task.take() {
            debug!(generation = active.generation, "cancelling in-flight fetch");
            task.abort();
        }
        active.generation += 1;
        let generation = active.generation;

        // Published under the lock so no older result can slip in after it
        self.inner.publisher.publish(LoadState::Loading);
        debug!(generation, "fetching repositories");

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move { inner.run_fetch(generation).await });
        active.task = Some(handle.abort_handle());
        handle
    }
}

impl<R> RepoListController<R> {
    /// Stops the in-flight fetch, if any. The current state is left as is.
    pub fn cancel(&self) {
        let mut active = self.inner.lock_active();
        if let Some(task) = active.task.take() {
            debug!(generation = active.generation, "fetch cancelled");
            task.abort();
        }
        // Nothing started before this point may publish any more
        active.generation += 1;
    }

    pub fn is_fetching(&self) -> bool {
        self.inner.lock_active().task.is_some()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState<RepoList> {
        self.inner.publisher.current()
    }

    /// Every state change from now on, in order.
    pub fn subscribe(&self) -> StateSubscription<RepoList> {
        self.inner.publisher.subscribe()
    }

    /// The latest state only; fast changes may be coalesced.
    pub fn watch(&self) -> watch::Receiver<LoadState<RepoList>> {
        self.inner.publisher.watch()
    }
}

impl<R> Drop for RepoListController<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<Inner<R>>?
//    - The spawned fetch task has to outlive the start() call that made it
//    - Arc lets the controller and the task share Inner; it is freed when the
//      last clone goes away
//
// 2. Why a std Mutex and not tokio::sync::Mutex?
//    - The lock is never held across an .await
//    - A std Mutex is simpler and faster when that holds
//
// 3. What does abort() do?
//    - It asks tokio to stop polling the task at its next .await
//    - Awaiting its JoinHandle then gives Err(e) with e.is_cancelled() == true
//
// 4. Why impl<R> Drop without the RepoRepository bound?
//    - Rust requires a Drop impl to have exactly the struct's own bounds
// -----------------------------------------------------------------------------
