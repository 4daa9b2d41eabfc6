//! Core traits for Explained.
//!
//! The primary trait is [`ConfigProvider`], which abstracts the site
//! configuration so the renderer and server can be driven by the CLI's
//! TOML-backed config or by a plain struct in tests.

use std::path::PathBuf;

use crate::Result;

/// Trait for site configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across request handlers
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use explained_core::traits::ConfigProvider;
/// use explained_core::Result;
///
/// #[derive(Clone)]
/// struct DocsConfig {
///     out: PathBuf,
/// }
///
/// impl ConfigProvider for DocsConfig {
///     fn project_name(&self) -> &str {
///         "docs"
///     }
///
///     fn site_title(&self) -> &str {
///         "Docs"
///     }
///
///     fn output_path(&self) -> Result<PathBuf> {
///         Ok(self.out.clone())
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Title shown in the navbar, hero, footer, and `<title>` tags.
    fn site_title(&self) -> &str;

    /// Tagline shown under the hero title.
    fn tagline(&self) -> &str {
        "Your interactive guide to learn React with clear explanations and practical examples."
    }

    /// Category ids whose sidebar section starts expanded.
    fn expanded_categories(&self) -> Vec<String> {
        vec!["getting-started".to_string()]
    }

    /// External repository link in the navbar, if any.
    fn github_url(&self) -> Option<&str> {
        None
    }

    /// Address the HTTP server binds to.
    fn server_host(&self) -> &str {
        "127.0.0.1"
    }

    /// Port the HTTP server listens on.
    fn server_port(&self) -> u16 {
        3000
    }

    /// Directory the static export writes into.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g. no
    /// current directory to fall back on).
    fn output_path(&self) -> Result<PathBuf>;
}
