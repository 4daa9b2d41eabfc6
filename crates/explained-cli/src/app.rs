//! ExplainedCli application.
//!
//! Owns the configuration and dispatches parsed [`CliArgs`] to the site,
//! catalog, and config handlers.

use crate::cli::{BaseCommand, CliArgs};
use crate::config::ExplainedConfig;
use crate::{config_handlers, content_handlers};
use explained_core::traits::ConfigProvider;
use explained_core::Result;
use explained_site::{SiteState, export_site};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// ExplainedCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct ExplainedCli<C: ConfigProvider> {
    name: String,
    state: SiteState<C>,
    version: String,
}

impl ExplainedCli<ExplainedConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = ExplainedConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> ExplainedCli<C> {
    /// Create a new CLI application over the built-in catalog.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            state: SiteState::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &C {
        self.state.config()
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Serve { port, host }) => {
                let host = host.unwrap_or_else(|| self.config().server_host().to_string());
                let port = port.unwrap_or_else(|| self.config().server_port());
                explained_site::serve(self.state.clone(), &host, port).await
            }
            Some(BaseCommand::Build { output, force }) => {
                let output = match output {
                    Some(dir) => PathBuf::from(dir),
                    None => self.config().output_path()?,
                };
                let report = export_site(&self.state, &output, force).await?;
                if !args.quiet {
                    println!(
                        "Wrote {} pages and {} assets ({} bytes) to {}",
                        report.pages,
                        report.assets,
                        report.bytes,
                        report.output_dir.display()
                    );
                }
                Ok(())
            }
            Some(BaseCommand::Topics { category, json }) => {
                let out =
                    content_handlers::list_topics(&self.state.store(), category.as_deref(), json)?;
                print!("{out}");
                if json {
                    println!();
                }
                Ok(())
            }
            Some(BaseCommand::Show { slug, format }) => {
                let out = content_handlers::show_topic(
                    &self.state.store(),
                    &self.state.page_context(),
                    &slug,
                    format,
                )?;
                println!("{out}");
                Ok(())
            }
            Some(BaseCommand::Check) => {
                let summary = content_handlers::check_catalog(&self.state.store())?;
                info!("{summary}");
                if !args.quiet {
                    println!("{summary}");
                }
                Ok(())
            }
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} (use --help for usage)", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_lock;
    use clap::Parser;

    #[derive(Clone)]
    struct TestConfig {
        out: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test-app"
        }

        fn site_title(&self) -> &str {
            "Test Site"
        }

        fn output_path(&self) -> Result<PathBuf> {
            Ok(self.out.clone())
        }
    }

    fn cli(out: PathBuf) -> ExplainedCli<TestConfig> {
        ExplainedCli::new("explained", TestConfig { out }).with_version("0.1.0")
    }

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("explained").chain(argv.iter().copied()))
    }

    #[test]
    fn test_new_and_version() {
        let app = cli(PathBuf::from("/tmp/out"));
        assert_eq!(app.name, "explained");
        assert_eq!(app.version, "0.1.0");
        assert_eq!(app.config().site_title(), "Test Site");
    }

    #[tokio::test]
    async fn test_run_version_and_no_command() {
        let app = cli(PathBuf::from("/tmp/out"));
        assert!(app.run(args(&["version"])).await.is_ok());
        assert!(app.run(args(&[])).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_build_uses_configured_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("dist");
        let app = cli(out.clone());

        app.run(args(&["--quiet", "build"])).await.unwrap();
        assert!(out.join("index.html").is_file());
        assert!(out.join("topic/react-ecosystem/index.html").is_file());
    }

    #[tokio::test]
    async fn test_run_build_refuses_non_empty_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        let app = cli(PathBuf::from("/unused"));
        let out = dir.path().to_str().unwrap();

        assert!(app.run(args(&["--quiet", "build", "-o", out])).await.is_err());
        app.run(args(&["--quiet", "build", "-o", out, "--force"]))
            .await
            .unwrap();
        assert!(dir.path().join("index.html").is_file());
    }

    #[tokio::test]
    async fn test_run_catalog_commands() {
        let app = cli(PathBuf::from("/tmp/out"));
        assert!(app.run(args(&["topics"])).await.is_ok());
        assert!(app.run(args(&["topics", "--json"])).await.is_ok());
        assert!(app.run(args(&["check"])).await.is_ok());
        assert!(app.run(args(&["show", "state-management"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_show_unknown_slug_is_not_found() {
        let app = cli(PathBuf::from("/tmp/out"));
        let err = app.run(args(&["show", "svelte"])).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_run_config_path() {
        let app = cli(PathBuf::from("/tmp/out"));
        let result = app
            .run(args(&["--config", "/tmp/explained.toml", "config", "path"]))
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        let app = cli(PathBuf::from("/tmp/out"));
        app.init_logging(false, false);
        app.init_logging(true, false);
        app.init_logging(false, true);
    }

    // ------------------------------------------------------------------------
    // ExplainedConfig integration
    // ------------------------------------------------------------------------

    #[test]
    fn test_from_args_with_file() {
        let _lock = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                project_name = "from-file"
                [site]
                title = "Hooks Handbook"
                [server]
                port = 9090
            "#,
        )
        .unwrap();

        let args = args(&["--config", path.to_str().unwrap()]);
        let app = ExplainedCli::from_args("explained", &args).unwrap();
        assert_eq!(app.config().project_name(), "from-file");
        assert_eq!(app.config().site_title(), "Hooks Handbook");
        assert_eq!(app.config().server_port(), 9090);
    }
}
