//! CLI argument parsing and command definitions.
//!
//! Serving and exporting the site, inspecting the catalog, and managing
//! the configuration file.

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "explained", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "EXPLAINED_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Serve the site over HTTP.
    Serve {
        /// Port to listen on (defaults to `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (defaults to `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Export the site as static HTML.
    Build {
        /// Output directory (defaults to `build.output_dir`).
        #[arg(short, long)]
        output: Option<String>,

        /// Write into a non-empty directory.
        #[arg(short, long)]
        force: bool,
    },

    /// List categories and topics.
    Topics {
        /// Only list this category.
        #[arg(short, long)]
        category: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Render a single topic to stdout.
    Show {
        /// Topic slug.
        slug: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// Validate the built-in catalog.
    Check,

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Output format for `show`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowFormat {
    /// Full HTML page.
    Html,
    /// Topic metadata and content blocks.
    Json,
    /// Plain text.
    Text,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "site.title").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
