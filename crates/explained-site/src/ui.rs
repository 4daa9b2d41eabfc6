//! Per-view toggle state.
//!
//! Each value is owned by the view instance that created it; nothing here is
//! shared. The server renders the initial state, and `assets/site.js` applies
//! the same transitions in the browser.

use std::time::Duration;

/// Delay before a copy button returns to its idle label.
pub const COPY_RESET_MS: u64 = 2000;

/// Category expanded when no configuration says otherwise.
pub const DEFAULT_EXPANDED_CATEGORY: &str = "getting-started";

/// Mobile sidebar drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    /// Whether the drawer is showing.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Menu button or backdrop click.
    #[must_use]
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a link inside the drawer.
    #[must_use]
    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// Accessible label for the menu button in this state.
    pub fn toggle_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

/// Which sidebar categories are expanded, in the order they were opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryExpansion {
    expanded: Vec<String>,
}

impl Default for CategoryExpansion {
    fn default() -> Self {
        Self::new([DEFAULT_EXPANDED_CATEGORY])
    }
}

impl CategoryExpansion {
    /// Expand `ids` in order; duplicates are kept once.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut expansion = Self {
            expanded: Vec::new(),
        };
        for id in ids {
            expansion = expansion.expand(id);
        }
        expansion
    }

    /// Whether category `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.iter().any(|e| e == id)
    }

    /// Expanded category ids, oldest first.
    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    /// Collapse `id` if expanded, expand it otherwise.
    #[must_use]
    pub fn toggle(mut self, id: &str) -> Self {
        if self.is_expanded(id) {
            self.expanded.retain(|e| e != id);
            self
        } else {
            self.expand(id)
        }
    }

    /// Expand `id`; a no-op if it already is.
    #[must_use]
    pub fn expand(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.is_expanded(&id) {
            self.expanded.push(id);
        }
        self
    }

    /// Also expand the category of the page being viewed, if any.
    #[must_use]
    pub fn with_active(self, category: Option<&str>) -> Self {
        match category {
            Some(id) => self.expand(id),
            None => self,
        }
    }
}

/// Result of a clipboard write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text reached the clipboard.
    Copied,
    /// The clipboard was unavailable or refused the write.
    Failed,
}

/// What a copy button currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyIndicator {
    /// Waiting for a click.
    #[default]
    Idle,
    /// Showing the success label until reset.
    Copied,
    /// Showing the failure label until reset.
    Failed,
}

impl CopyIndicator {
    /// Every indicator state.
    pub const ALL: [Self; 3] = [Self::Idle, Self::Copied, Self::Failed];

    /// Button text and accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy code",
            Self::Copied => "Copied",
            Self::Failed => "Copy failed",
        }
    }

    /// Value of the button's `data-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Copied => "copied",
            Self::Failed => "failed",
        }
    }
}

/// Handle for the delayed reset scheduled after a copy.
///
/// Only the ticket from the latest copy can reset the button; earlier ones
/// are stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
}

impl ResetTicket {
    /// How long to wait before firing the reset.
    pub fn delay(self) -> Duration {
        Duration::from_millis(COPY_RESET_MS)
    }
}

/// Copy-to-clipboard button on a code block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyButton {
    indicator: CopyIndicator,
    generation: u64,
}

impl CopyButton {
    /// What the button shows now.
    pub fn indicator(self) -> CopyIndicator {
        self.indicator
    }

    /// Record the outcome of a clipboard write and schedule a reset.
    pub fn on_copy(&mut self, outcome: CopyOutcome) -> ResetTicket {
        self.indicator = match outcome {
            CopyOutcome::Copied => CopyIndicator::Copied,
            CopyOutcome::Failed => CopyIndicator::Failed,
        };
        self.generation = self.generation.wrapping_add(1);
        ResetTicket {
            generation: self.generation,
        }
    }

    /// Fire a scheduled reset. Returns false if the ticket was stale.
    pub fn on_reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.indicator = CopyIndicator::Idle;
        true
    }
}
