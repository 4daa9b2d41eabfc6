//! Stylesheet and client script, embedded at compile time.

/// URL prefix for embedded assets.
pub const ASSET_PATH_PREFIX: &str = "/assets/";

/// A static file served alongside the pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    /// File name under [`ASSET_PATH_PREFIX`].
    pub name: &'static str,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// File contents.
    pub body: &'static str,
}

impl Asset {
    /// URL path the asset is served from.
    pub fn href(&self) -> String {
        format!("{ASSET_PATH_PREFIX}{}", self.name)
    }
}

/// Page stylesheet.
pub const STYLESHEET: Asset = Asset {
    name: "site.css",
    content_type: "text/css; charset=utf-8",
    body: include_str!("../assets/site.css"),
};

/// Sidebar, category, and copy-button behaviour.
pub const SCRIPT: Asset = Asset {
    name: "site.js",
    content_type: "text/javascript; charset=utf-8",
    body: include_str!("../assets/site.js"),
};

/// Every embedded asset, in export order.
pub const ALL: &[Asset] = &[STYLESHEET, SCRIPT];

/// Look up an asset by file name.
pub fn find(name: &str) -> Option<&'static Asset> {
    ALL.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("site.css").unwrap().content_type, "text/css; charset=utf-8");
        assert!(find("site.js").unwrap().body.contains("clipboard"));
        assert!(find("../Cargo.toml").is_none());
    }

    #[test]
    fn test_href() {
        assert_eq!(STYLESHEET.href(), "/assets/site.css");
    }
}
