// src/model/repo.rs
// =============================================================================
// The repository record returned by `GET /orgs/{org}/repos`.
//
// Field names follow the upstream API exactly (stargazers_count, avatar_url)
// so serde can map them without renaming. A Repo is an immutable value: it
// is only ever built from decoded server data or from fixture literals.
//
// Rust concepts:
// - #[derive(Deserialize)]: Generates JSON decoding code for our structs
// - #[serde(...)] attributes: Tweak how individual fields are decoded
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered list of repositories, in the order the server returned them.
pub type RepoList = Vec<Repo>;

/// The owner of a repository.
///
/// The real API calls the account name `login`; we accept both `name` and
/// `login` so fixtures and live responses decode the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "login")]
    pub name: String,
    /// Link to the owner's avatar image, if the server sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A single repository record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub owner: User,
    // GitHub sends `null` for repos without a description
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    pub stargazers_count: u64,
}

// The key must still be present; only its value may be null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
