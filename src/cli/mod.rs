// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the recipe-ranker command-line interface.
//!
//! Three subcommands: `rank` to filter and order a recipe payload the way the
//! recipe grid does, `show` to print one recipe's detail view, and `validate`
//! to check a payload without ranking it. Payloads come from a file or, when
//! `--input` is omitted, from stdin.

pub mod display;

use clap::{Parser, Subcommand};
use recipe_ranker::{FilterMode, LinkStyle};
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `recipe_ranker=debug`.
pub const LOG_ENV: &str = "RECIPE_RANKER_LOG";

#[derive(Parser)]
#[command(
    name = "recipe-ranker",
    about = "Search and rank recipe listings",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and order recipes, then print them as cards
    Rank {
        /// JSON payload (array of recipes); stdin when omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Case-insensitive text matched against title and publisher
        #[arg(short, long, default_value = "")]
        query: String,

        /// Filter mode: all, popular, recent or trending
        #[arg(short, long, default_value = "all")]
        mode: FilterMode,

        /// Maximum results for popular, recent and trending
        #[arg(short, long)]
        limit: Option<usize>,

        /// Ranker configuration file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Detail link format: static or server
        #[arg(long)]
        link_style: Option<LinkStyle>,

        /// Print cards as JSON instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Print the detail view of one recipe
    Show {
        /// JSON payload (array of recipes); stdin when omitted
        #[arg(short, long)]
        input: Option<String>,

        /// The recipe's `recipe_id`
        recipe_id: String,

        /// Detail link format: static or server
        #[arg(long, default_value = "static")]
        link_style: LinkStyle,
    },

    /// Load and validate a payload
    Validate {
        /// JSON payload (array of recipes); stdin when omitted
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Install the stderr log subscriber. Defaults to warnings only.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("recipe_ranker=warn"));

    // A second call (tests) finds a subscriber already installed; that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_defaults() {
        let cli = Cli::try_parse_from(["recipe-ranker", "rank"]).unwrap();
        match cli.command {
            Commands::Rank {
                input,
                query,
                mode,
                limit,
                json,
                ..
            } => {
                assert!(input.is_none());
                assert_eq!(query, "");
                assert_eq!(mode, FilterMode::All);
                assert!(limit.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Rank"),
        }
    }

    #[test]
    fn test_parse_rank_mode_is_case_insensitive() {
        let cli =
            Cli::try_parse_from(["recipe-ranker", "rank", "--mode", "Trending", "-q", "soup"])
                .unwrap();
        match cli.command {
            Commands::Rank { mode, query, .. } => {
                assert_eq!(mode, FilterMode::Trending);
                assert_eq!(query, "soup");
            }
            _ => panic!("Expected Rank"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["recipe-ranker", "rank", "--mode", "spicy"]).is_err());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "recipe-ranker",
            "show",
            "-i",
            "recipes.json",
            "35382",
            "--link-style",
            "server",
        ])
        .unwrap();
        match cli.command {
            Commands::Show {
                input,
                recipe_id,
                link_style,
            } => {
                assert_eq!(input.as_deref(), Some("recipes.json"));
                assert_eq!(recipe_id, "35382");
                assert_eq!(link_style, LinkStyle::Server);
            }
            _ => panic!("Expected Show"),
        }
    }
}
