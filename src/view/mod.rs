// src/view/mod.rs
// =============================================================================
// Turns state into text for the terminal.
//
// Submodules:
// - list: One screen per LoadState case (loading, error, empty, table)
// - detail: A single repository's details
//
// Views only read state. They never hold a controller, so they can't change
// anything by accident.
// =============================================================================

mod detail;
mod list;

pub use detail::render_detail;
pub use list::{render_list, RETRY_HINT};

use anyhow::Result;
use serde::Serialize;

/// Pretty-printed JSON for --json output.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
