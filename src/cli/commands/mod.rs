//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod browse;
mod config_cmd;
mod content;
mod meta;
mod sanitize;
mod testimonials;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

use sanitize::SanitizeKind;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio content engine: project filtering and metadata sanitization")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content data file (overrides config and FOLIO_CONTENT)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// List every facet value available for filtering
    Filters {
        /// List facets of the experience timeline instead of projects
        #[arg(long)]
        experience: bool,
    },

    /// List projects, optionally filtered by facet (matches any selected facet)
    Projects {
        /// Facet to select (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Interactively toggle facets and watch the project list update
    Browse,

    /// Sanitize a string the way page metadata is sanitized
    Sanitize {
        /// Which sanitizer to apply
        #[arg(value_enum)]
        kind: SanitizeKind,
        /// Raw input
        input: String,
    },

    /// Print the sanitized <head> metadata for a page
    Meta {
        /// Page path, used for the canonical URL
        #[arg(short, long, default_value = "/")]
        path: String,
        /// Page title (defaults to the site name)
        #[arg(long)]
        title: Option<String>,
        /// Page description (defaults to the site description)
        #[arg(long)]
        description: Option<String>,
        /// Take title and description from this project
        #[arg(long, conflicts_with_all = ["title", "description"])]
        project: Option<String>,
        /// Print JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Show testimonials, rotating through them like the site carousel
    Testimonials {
        /// Number of automatic rotations to run (0 = show current only)
        #[arg(short = 'n', long, default_value = "0")]
        cycles: usize,
    },

    /// Show the resolved configuration (sensitive values redacted)
    Config,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        content: cli.content,
    };
    let (settings, config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Filters { experience } => content::cmd_filters(&settings, experience),
        Commands::Projects { filters, json } => content::cmd_projects(&settings, &filters, json),
        Commands::Browse => browse::cmd_browse(&settings).await,
        Commands::Sanitize { kind, input } => sanitize::cmd_sanitize(kind, &input),
        Commands::Meta {
            path,
            title,
            description,
            project,
            json,
        } => meta::cmd_meta(
            &settings,
            &path,
            title.as_deref(),
            description.as_deref(),
            project.as_deref(),
            json,
        ),
        Commands::Testimonials { cycles } => {
            testimonials::cmd_testimonials(&settings, cycles).await
        }
        Commands::Config => config_cmd::cmd_config_show(&settings, &config),
    }
}
