// src/view/detail.rs
// =============================================================================
// Detail screen for a single repository: owner, name, description and stars.
// =============================================================================

use crate::model::Repo;

pub fn render_detail(repo: &Repo) -> String {
    let mut out = String::new();

    out.push_str(&format!("👤 {}\n", repo.owner.name));
    if let Some(avatar) = &repo.owner.avatar_url {
        out.push_str(&format!("   {}\n", avatar));
    }
    out.push_str(&format!("\n📦 {}\n", repo.name));
    out.push_str(&"-".repeat(repo.name.chars().count() + 3));
    out.push('\n');

    if !repo.description.is_empty() {
        out.push_str(&format!("{}\n", repo.description));
    }

    let unit = if repo.stargazers_count == 1 { "star" } else { "stars" };
    out.push_str(&format!("\n⭐ {} {}", repo.stargazers_count, unit));
    out
}
