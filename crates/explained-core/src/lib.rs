//! Explained Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Explained
//! crates. It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`state`]: Generic application state container
//! - [`traits`]: Configuration abstraction

pub mod error;
pub mod state;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use state::AppState;
pub use traits::ConfigProvider;
