//! Configuration for the `explained` CLI.
//!
//! Provides the [`ExplainedConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `EXPLAINED_CONFIG` environment variable
//! 3. XDG default: `~/.config/explained/config.toml`
//! 4. Built-in defaults
//!
//! `EXPLAINED_*` environment variables are layered over whichever file is
//! found, e.g. `EXPLAINED_SITE_TITLE` or `EXPLAINED_SERVER_HOST`.

use confyg::{Confygery, env};
use explained_core::traits::ConfigProvider;
use explained_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Environment variable prefix and config directory name.
pub const ENV_PREFIX: &str = "EXPLAINED";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EXPLAINED_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainedConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Page content and presentation.
    pub site: SiteConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Static export configuration.
    pub build: BuildConfig,
}

/// Page content and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title used in the navbar, hero, and footer.
    pub title: String,

    /// Hero tagline.
    pub tagline: String,

    /// Repository link shown in the navbar.
    pub github_url: Option<String>,

    /// Sidebar categories that start expanded.
    ///
    /// From the environment this is a JSON array or a comma-separated list.
    #[serde(deserialize_with = "string_list")]
    pub expanded_categories: Vec<String>,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(deserialize_with = "port")]
    pub port: u16,

    /// Host address to bind to.
    pub host: String,
}

/// Static export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory; relative paths resolve against the working directory.
    pub output_dir: String,
}

// ============================================================================
// Env-tolerant field deserializers
// ============================================================================

// confyg overlays every `EXPLAINED_*` value as a TOML string, so non-string
// fields also accept their textual form.

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListValue {
    Items(Vec<String>),
    Text(String),
}

fn port<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u16, D::Error> {
    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid port '{text}': {e}"))),
    }
}

fn string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    match ListValue::deserialize(deserializer)? {
        ListValue::Items(items) => Ok(items),
        ListValue::Text(text) => parse_string_list(&text).map_err(serde::de::Error::custom),
    }
}

/// Parse `["a","b"]` or `a, b` into a list of strings.
fn parse_string_list(text: &str) -> std::result::Result<Vec<String>, String> {
    let text = text.trim();
    if text.starts_with('[') {
        return serde_json::from_str(text).map_err(|e| format!("invalid list '{text}': {e}"));
    }
    Ok(text
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect())
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ExplainedConfig {
    fn default() -> Self {
        Self {
            project_name: "explained".to_string(),
            site: SiteConfig::default(),
            server: ServerConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "React Explained".to_string(),
            tagline: "Your interactive guide to learn React with clear explanations and practical examples.".to_string(),
            github_url: Some("https://github.com/facebook/react".to_string()),
            expanded_categories: vec!["getting-started".to_string()],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl ExplainedConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("site");
        env_opts.add_section("server");
        env_opts.add_section("build");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("explained").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `EXPLAINED_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for ExplainedConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn site_title(&self) -> &str {
        &self.site.title
    }

    fn tagline(&self) -> &str {
        &self.site.tagline
    }

    fn expanded_categories(&self) -> Vec<String> {
        self.site.expanded_categories.clone()
    }

    fn github_url(&self) -> Option<&str> {
        self.site.github_url.as_deref()
    }

    fn server_host(&self) -> &str {
        &self.server.host
    }

    fn server_port(&self) -> u16 {
        self.server.port
    }

    fn output_path(&self) -> Result<PathBuf> {
        let path = PathBuf::from(&self.build.output_dir);
        if path.is_absolute() {
            return Ok(path);
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(|e| Error::config(format!("Could not determine output path: {e}")))
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Test support
// ============================================================================

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// RAII guard for env var manipulation in tests.
    struct EnvGuard {
        key: String,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn new(key: &str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            // SAFETY: env-touching tests hold ENV_LOCK.
            unsafe { std::env::set_var(key, value) };
            Self {
                key: key.to_string(),
                prev,
            }
        }

        fn remove(key: &str) -> Self {
            let prev = std::env::var(key).ok();
            // SAFETY: env-touching tests hold ENV_LOCK.
            unsafe { std::env::remove_var(key) };
            Self {
                key: key.to_string(),
                prev,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: env-touching tests hold ENV_LOCK.
            unsafe {
                match &self.prev {
                    Some(val) => std::env::set_var(&self.key, val),
                    None => std::env::remove_var(&self.key),
                }
            }
        }
    }

    #[test]
    fn test_explained_config_default() {
        let config = ExplainedConfig::default();
        assert_eq!(config.project_name, "explained");
        assert_eq!(config.site.title, "React Explained");
        assert_eq!(config.site.expanded_categories, vec!["getting-started"]);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.build.output_dir, "dist");
    }

    #[test]
    fn test_explained_config_from_toml() {
        let toml_str = r#"
            project_name = "hooks-site"

            [site]
            title = "Hooks Handbook"
            expanded_categories = ["core-concepts"]

            [server]
            port = 8080
            host = "0.0.0.0"

            [build]
            output_dir = "/srv/www"
        "#;

        let config: ExplainedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project_name, "hooks-site");
        assert_eq!(config.site.title, "Hooks Handbook");
        assert_eq!(config.site.expanded_categories, vec!["core-concepts"]);
        // Unset fields keep their defaults.
        assert!(config.site.tagline.contains("React"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.build.output_dir, "/srv/www");
    }

    #[test]
    fn test_explained_config_to_toml_round_trip() {
        let config = ExplainedConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("project_name = \"explained\""));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("port = 3000"));

        let parsed: ExplainedConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    // ------------------------------------------------------------------------
    // Loading tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_explained_config_load_from_file() {
        let _lock = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                project_name = "loaded"
                [server]
                port = 9090
            "#,
        )
        .unwrap();

        let config = ExplainedConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.project_name, "loaded");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.site.title, "React Explained");
    }

    #[test]
    fn test_explained_config_load_defaults() {
        let _lock = env_lock();
        let config = ExplainedConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, ExplainedConfig::default());
    }

    #[test]
    fn test_explained_config_load_env_overlay() {
        let _lock = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [server]
                host = "127.0.0.1"
            "#,
        )
        .unwrap();

        // confyg passes env values as strings, so overlay a string field.
        let _guard = EnvGuard::new("EXPLAINED_SERVER_HOST", "0.0.0.0");
        let config = ExplainedConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_explained_config_load_env_port() {
        let _lock = env_lock();
        let _guard = EnvGuard::new("EXPLAINED_SERVER_PORT", "8080");
        let config = ExplainedConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_explained_config_load_env_bad_port() {
        let _lock = env_lock();
        let _guard = EnvGuard::new("EXPLAINED_SERVER_PORT", "eighty");
        let err = ExplainedConfig::load(Some("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("invalid port"));
    }

    #[test]
    fn test_explained_config_load_env_categories_comma_list() {
        let _lock = env_lock();
        let _guard = EnvGuard::new(
            "EXPLAINED_SITE_EXPANDED_CATEGORIES",
            "core-concepts, advanced-topics",
        );
        let config = ExplainedConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(
            config.site.expanded_categories,
            vec!["core-concepts", "advanced-topics"]
        );
    }

    #[test]
    fn test_exported_env_vars_load_back() {
        let _lock = env_lock();
        let mut exported = ExplainedConfig {
            project_name: "exported".into(),
            ..Default::default()
        };
        exported.server.port = 4321;
        exported.site.expanded_categories = vec!["core-concepts".into(), "ecosystem".into()];

        let _guards: Vec<EnvGuard> = exported
            .to_env_vars()
            .unwrap()
            .iter()
            .map(|(key, value)| EnvGuard::new(key, value))
            .collect();

        let loaded = ExplainedConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(loaded, exported);
    }

    #[test]
    fn test_parse_string_list() {
        assert_eq!(parse_string_list(r#"["a","b"]"#).unwrap(), vec!["a", "b"]);
        assert_eq!(parse_string_list(" a ,b,, ").unwrap(), vec!["a", "b"]);
        assert!(parse_string_list("").unwrap().is_empty());
        assert!(parse_string_list("[a").is_err());
    }

    // ------------------------------------------------------------------------
    // resolve_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = ExplainedConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_env() {
        let _lock = env_lock();
        let _guard = EnvGuard::new(CONFIG_ENV_VAR, "/env/config.toml");
        let path = ExplainedConfig::resolve_config_path(None);
        assert_eq!(path, Some(PathBuf::from("/env/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_default() {
        let _lock = env_lock();
        let _guard = EnvGuard::remove(CONFIG_ENV_VAR);
        let p = ExplainedConfig::resolve_config_path(None).unwrap();
        assert!(p.to_str().unwrap().contains("explained"));
        assert!(p.to_str().unwrap().ends_with("config.toml"));
    }

    // ------------------------------------------------------------------------
    // ConfigProvider tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_provider_site_fields() {
        let config = ExplainedConfig {
            site: SiteConfig {
                title: "Hooks".into(),
                tagline: "All about hooks".into(),
                github_url: None,
                expanded_categories: vec!["core-concepts".into()],
            },
            ..Default::default()
        };
        assert_eq!(config.site_title(), "Hooks");
        assert_eq!(config.tagline(), "All about hooks");
        assert!(config.github_url().is_none());
        assert_eq!(config.expanded_categories(), vec!["core-concepts"]);
    }

    #[test]
    fn test_config_provider_server_fields() {
        let config = ExplainedConfig {
            server: ServerConfig {
                port: 4000,
                host: "0.0.0.0".into(),
            },
            ..Default::default()
        };
        assert_eq!(config.server_port(), 4000);
        assert_eq!(config.server_host(), "0.0.0.0");
    }

    #[test]
    fn test_config_provider_output_path_absolute() {
        let config = ExplainedConfig {
            build: BuildConfig {
                output_dir: "/srv/site".into(),
            },
            ..Default::default()
        };
        assert_eq!(config.output_path().unwrap(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_config_provider_output_path_relative() {
        let config = ExplainedConfig::default();
        assert_eq!(
            config.output_path().unwrap(),
            std::env::current_dir().unwrap().join("dist")
        );
    }

    // ------------------------------------------------------------------------
    // to_env_vars tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_to_env_vars() {
        let vars = ExplainedConfig::default().to_env_vars().unwrap();
        let map: HashMap<_, _> = vars.into_iter().collect();
        assert_eq!(map.get("EXPLAINED_PROJECT_NAME").unwrap(), "explained");
        assert_eq!(map.get("EXPLAINED_SERVER_PORT").unwrap(), "3000");
        assert_eq!(map.get("EXPLAINED_SITE_TITLE").unwrap(), "React Explained");
        assert_eq!(
            map.get("EXPLAINED_SITE_EXPANDED_CATEGORIES").unwrap(),
            "[\"getting-started\"]"
        );
        assert_eq!(map.get("EXPLAINED_BUILD_OUTPUT_DIR").unwrap(), "dist");
    }

    #[test]
    fn test_explained_config_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExplainedConfig>();
    }
}
