//! Topic catalog and content transformation.
//!
//! # Features
//!
//! - [`ContentStore`]: the compiled-in, category-ordered tutorial catalog
//! - [`transform`]: raw topic body to an ordered sequence of [`Block`]s
//! - Topic lookup by slug across all categories

mod catalog;
pub mod store;
pub mod topic;
pub mod transform;

pub use store::ContentStore;
pub use topic::{Category, CategoryInfo, Topic};
pub use transform::{Block, HeadingLevel, transform};
