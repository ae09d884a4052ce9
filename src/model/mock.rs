// src/model/mock.rs
// =============================================================================
// Fixture repositories.
//
// Used by the offline `--mock` data source and as test data. The values are
// fixed literals so tests can assert on them directly.
// =============================================================================

use super::{Repo, User};

fn mock_owner() -> User {
    User {
        name: "Owner".to_string(),
        avatar_url: None,
    }
}

fn mock_repo(id: u64, description: &str, stargazers_count: u64) -> Repo {
    Repo {
        id,
        name: format!("Test Repo{}", id),
        owner: mock_owner(),
        description: description.to_string(),
        stargazers_count,
    }
}

/// The five fixture repos (mock1 .. mock5), in display order.
pub fn mock_repos() -> Vec<Repo> {
    vec![
        mock_repo(1, "My first test repository", 10),
        mock_repo(2, "Another test repository", 15),
        mock_repo(3, "", 20),
        mock_repo(4, "A repository with a longer description to exercise wrapping", 25),
        mock_repo(5, "The last one", 30),
    ]
}
