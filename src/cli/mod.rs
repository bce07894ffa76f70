//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod browse;
pub mod context;
pub mod handlers;
pub mod posts;
pub mod show;
pub mod taxonomy;

pub use args::{OutputFormat, PageArgs, PostFilterArgs};
pub use context::CommandContext;

/// postdeck - browse a WordPress-style content API from the terminal
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "POSTDECK_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "POSTDECK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Content API root, e.g. https://example.com/wp-json/wp/v2
    #[arg(long, global = true, env = "POSTDECK_API_BASE", hide_env = true)]
    pub api_base: Option<String>,

    /// Base URL media files are addressed under
    #[arg(long, global = true, env = "POSTDECK_STREAM_BASE", hide_env = true)]
    pub stream_base: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "POSTDECK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, optionally filtered
    Posts {
        #[command(flatten)]
        filters: PostFilterArgs,

        #[command(flatten)]
        pagination: PageArgs,
    },

    /// Search posts
    Search {
        /// Search term
        term: String,

        #[command(flatten)]
        pagination: PageArgs,
    },

    /// List tags
    Tags {
        #[command(flatten)]
        pagination: PageArgs,
    },

    /// List actors with a representative image each
    Actors {
        #[command(flatten)]
        pagination: PageArgs,
    },

    /// Show one post with its media URLs
    Show {
        /// Post ID
        id: u64,

        /// Check which media URL actually loads
        #[arg(long)]
        probe: bool,
    },

    /// Interactive session reading commands from stdin
    #[command(after_help = crate::browse::command::HELP)]
    Browse,

    /// Display version information
    Version,
}
