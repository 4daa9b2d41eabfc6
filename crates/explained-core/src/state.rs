//! Application state management.
//!
//! Provides [`AppState<C>`], a thread-safe container for shared application
//! state that is generic over the configuration provider.
//!
//! # Design
//!
//! `AppState` holds only the configuration. The site crate wraps it together
//! with the content store to form the router state.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use explained_core::{AppState, ConfigProvider, Result};
//!
//! #[derive(Clone)]
//! struct MyConfig {
//!     out: PathBuf,
//! }
//!
//! impl ConfigProvider for MyConfig {
//!     fn project_name(&self) -> &str { "my-project" }
//!     fn site_title(&self) -> &str { "My Docs" }
//!     fn output_path(&self) -> Result<PathBuf> { Ok(self.out.clone()) }
//! }
//!
//! let state = AppState::new(MyConfig { out: PathBuf::from("dist") });
//! assert_eq!(state.config().site_title(), "My Docs");
//! ```

use std::sync::Arc;

use crate::traits::ConfigProvider;

/// Thread-safe shared application state.
///
/// The configuration is wrapped in an `Arc`, so cloning is cheap and every
/// request handler sees the same instance.
#[derive(Debug)]
pub struct AppState<C: ConfigProvider> {
    config: Arc<C>,
}

impl<C: ConfigProvider> AppState<C> {
    /// Create a new AppState wrapping the given configuration.
    pub fn new(config: C) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create AppState from an existing Arc-wrapped configuration.
    pub fn from_arc(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Get a cloneable handle to the configuration.
    pub fn config_arc(&self) -> Arc<C> {
        Arc::clone(&self.config)
    }

    /// Get the project name from the configuration.
    pub fn project_name(&self) -> &str {
        self.config.project_name()
    }
}

impl<C: ConfigProvider> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use std::path::PathBuf;

    #[derive(Clone, Debug)]
    struct TestConfig {
        name: String,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn site_title(&self) -> &str {
            "Test"
        }

        fn output_path(&self) -> Result<PathBuf> {
            Ok(PathBuf::from("/tmp/out"))
        }
    }

    fn test_config() -> TestConfig {
        TestConfig {
            name: "test-project".into(),
        }
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(test_config());
        assert_eq!(state.config().project_name(), "test-project");
        assert_eq!(state.project_name(), "test-project");
    }

    #[test]
    fn test_app_state_from_arc() {
        let config = Arc::new(test_config());
        let state = AppState::from_arc(Arc::clone(&config));
        assert!(Arc::ptr_eq(&config, &state.config_arc()));
    }

    #[test]
    fn test_app_state_clone_shares_config() {
        let state1 = AppState::new(test_config());
        let state2 = state1.clone();
        assert!(Arc::ptr_eq(&state1.config_arc(), &state2.config_arc()));

        drop(state1);
        assert_eq!(state2.project_name(), "test-project");
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::new(test_config());
        assert!(format!("{state:?}").contains("AppState"));
    }

    #[test]
    fn test_app_state_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState<TestConfig>>();
    }
}
