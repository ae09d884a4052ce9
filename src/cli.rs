// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - list: Show an organization's repositories (the list screen)
// - show: Show one repository in detail (the detail screen)
//
// Rust concepts:
// - Derive macros: clap generates the parser from these types
// - Option<T>: Arguments the user may leave out
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "github-client",
    version,
    about = "List a GitHub organization's repositories and inspect them",
    long_about = "github-client lists the public repositories of a GitHub organization \
                  and shows details for a single repository. Use --mock to try it offline."
)]
pub struct Cli {
    /// Base URL of the GitHub API (overrides GITHUB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the repositories of an organization
    ///
    /// Example: github-client list rust-lang
    List {
        /// Organization to list (overrides GITHUB_ORG, default: apple)
        org: Option<String>,

        /// Output the loaded list as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Use built-in sample repositories instead of the network
        #[arg(long)]
        mock: bool,

        /// On failure, exit instead of asking whether to retry
        #[arg(long)]
        no_prompt: bool,
    },

    /// Show the details of one repository
    ///
    /// Example: github-client show swift --org apple
    Show {
        /// Repository name (case-insensitive)
        name: String,

        /// Organization that owns the repository
        #[arg(long)]
        org: Option<String>,

        /// Output the repository as JSON
        #[arg(long)]
        json: bool,

        /// Use built-in sample repositories instead of the network
        #[arg(long)]
        mock: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["github-client", "list"]).unwrap();
        match cli.command {
            Commands::List { org, json, mock, no_prompt } => {
                assert_eq!(org, None);
                assert!(!json && !mock && !no_prompt);
            }
            Commands::Show { .. } => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_show_with_global_flags() {
        let cli = Cli::try_parse_from([
            "github-client",
            "show",
            "swift",
            "--org",
            "apple",
            "--api-url",
            "http://127.0.0.1:9000",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        match cli.command {
            Commands::Show { name, org, .. } => {
                assert_eq!(name, "swift");
                assert_eq!(org.as_deref(), Some("apple"));
            }
            Commands::List { .. } => panic!("expected show"),
        }
    }

    #[test]
    fn test_show_requires_name() {
        assert!(Cli::try_parse_from(["github-client", "show"]).is_err());
    }
}
