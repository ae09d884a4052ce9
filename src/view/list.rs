// src/view/list.rs
// =============================================================================
// The repository list screen.
//
// Every LoadState case has its own rendering:
// - Idle / Loading: a placeholder while we wait
// - Failed: a generic message and how to retry (the error itself goes to
//   the log, not the user)
// - Loaded with no repos: a "no repositories" message
// - Loaded with repos: a table of owner / name / stars
// =============================================================================

use crate::model::{Repo, RepoList};
use crate::state::LoadState;

pub const RETRY_HINT: &str = "Retry? [y/N]";

// Shown under every failure, whether or not the user gets a prompt
const FAILED_HINT: &str = "🔁 Run the command again to retry.";

// Long names are cut so the table stays aligned
const NAME_WIDTH: usize = 50;

pub fn render_list(state: &LoadState<RepoList>) -> String {
    match state {
        LoadState::Idle | LoadState::Loading => "⏳ Loading repositories...".to_string(),
        LoadState::Failed(_) => format!("❌ Something went wrong.\n{}", FAILED_HINT),
        LoadState::Loaded(repos) if repos.is_empty() => "📭 No repositories".to_string(),
        LoadState::Loaded(repos) => render_table(repos),
    }
}

fn render_table(repos: &[Repo]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<4} {:<50} {:>8}\n", "#", "REPOSITORY", "STARS"));
    out.push_str(&"=".repeat(64));
    out.push('\n');

    for (index, repo) in repos.iter().enumerate() {
        let full_name = format!("{} / {}", repo.owner.name, repo.name);
        out.push_str(&format!(
            "{:<4} {:<50} {:>8}\n",
            index + 1,
            truncate(&full_name, NAME_WIDTH),
            repo.stargazers_count
        ));
    }

    out.push_str(&format!("\n📋 Total: {}", repos.len()));
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
