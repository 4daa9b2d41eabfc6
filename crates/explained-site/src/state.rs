//! Router state.

use explained_content::ContentStore;
use explained_core::{AppState, ConfigProvider};

use crate::render::PageContext;

/// Configuration plus content store, cloned into every handler.
#[derive(Debug)]
pub struct SiteState<C: ConfigProvider> {
    app: AppState<C>,
    store: ContentStore,
}

impl<C: ConfigProvider> SiteState<C> {
    /// State over the built-in catalog.
    pub fn new(config: C) -> Self {
        Self::with_store(config, ContentStore::builtin())
    }

    /// State over a caller-supplied catalog.
    pub fn with_store(config: C, store: ContentStore) -> Self {
        Self {
            app: AppState::new(config),
            store,
        }
    }

    /// Get the configuration provider.
    pub fn config(&self) -> &C {
        self.app.config()
    }

    /// Get the content store. Stores are `Copy` views over static data.
    pub fn store(&self) -> ContentStore {
        self.store
    }

    /// Page-wide template inputs derived from the configuration.
    pub fn page_context(&self) -> PageContext {
        PageContext::from_config(self.config())
    }
}

impl<C: ConfigProvider> Clone for SiteState<C> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            store: self.store,
        }
    }
}
