//! Command-line interface for React Explained.
//!
//! # Key Abstractions
//!
//! - [`ExplainedCli`]: application parameterized over a config provider
//! - [`CliArgs`]: clap-derived arguments and subcommands
//! - [`ExplainedConfig`]: TOML + env configuration loaded with `confyg`

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod content_handlers;

pub use app::ExplainedCli;
pub use cli::{BaseCommand, CliArgs, ConfigAction, ShowFormat};
pub use config::ExplainedConfig;
