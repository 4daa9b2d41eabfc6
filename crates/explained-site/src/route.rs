//! URL routing.
//!
//! `/` is the landing page and `/topic/{slug}` a topic page. A slug with no
//! matching topic redirects to `/` rather than showing an error.

use explained_content::topic::TOPIC_PATH_PREFIX;
use explained_content::{ContentStore, Topic};

use crate::assets::{self, ASSET_PATH_PREFIX, Asset};

/// Parsed request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Topic(String),
    Asset(String),
    Unknown,
}

/// What to do with a [`Route`] against a particular store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Home,
    Topic(&'static Topic),
    Asset(&'static Asset),
    Redirect(String),
    NotFound,
}

impl Route {
    /// Parse a URL path; the query string, if present, is ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == "/" || path == "/index.html" {
            return Self::Home;
        }

        if let Some(rest) = path.strip_prefix(TOPIC_PATH_PREFIX) {
            let slug = rest
                .strip_suffix("/index.html")
                .or_else(|| rest.strip_suffix('/'))
                .unwrap_or(rest);
            if !slug.is_empty() && !slug.contains('/') {
                return Self::Topic(slug.to_string());
            }
            return Self::Unknown;
        }

        if let Some(name) = path.strip_prefix(ASSET_PATH_PREFIX) {
            if !name.is_empty() && !name.contains('/') {
                return Self::Asset(name.to_string());
            }
        }

        Self::Unknown
    }

    /// Canonical path for this route, if it has one.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Home => Some("/".to_string()),
            Self::Topic(slug) => Some(topic_href(slug)),
            Self::Asset(name) => Some(format!("{ASSET_PATH_PREFIX}{name}")),
            Self::Unknown => None,
        }
    }

    pub fn resolve(&self, store: &ContentStore) -> Resolution {
        match self {
            Self::Home => Resolution::Home,
            Self::Topic(slug) => match store.find(slug) {
                Some(topic) => Resolution::Topic(topic),
                None => {
                    tracing::debug!(slug = %slug, "unknown topic, redirecting to root");
                    Resolution::Redirect("/".to_string())
                }
            },
            Self::Asset(name) => match assets::find(name) {
                Some(asset) => Resolution::Asset(asset),
                None => Resolution::NotFound,
            },
            Self::Unknown => Resolution::NotFound,
        }
    }
}

/// Path of the topic page for `slug`.
pub fn topic_href(slug: &str) -> String {
    format!("{TOPIC_PATH_PREFIX}{slug}")
}
