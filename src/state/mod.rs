// src/state/mod.rs
// =============================================================================
// Lifecycle state for values that are produced asynchronously.
//
// Submodules:
// - load_state: The four-case LoadState<T> enum
// - publisher: An observable holder that hands LoadState changes to observers
//
// Nothing in here knows about repositories; LoadState and StatePublisher work
// for any T.
// =============================================================================

mod load_state;
mod publisher;

pub use load_state::{LoadState, SharedError};
pub use publisher::{StatePublisher, StateSubscription};
