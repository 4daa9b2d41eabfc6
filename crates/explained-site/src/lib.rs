//! Site rendering, serving, and export.
//!
//! # Key Abstractions
//!
//! - [`SiteState`]: configuration plus content store, shared by all handlers
//! - [`render`]: maud templates for the landing page, topic pages, and shell
//! - [`ui`]: client-side toggle state machines mirrored by the embedded script
//! - [`server`]: axum router and listener
//! - [`export`]: write the whole site to a directory of static files

pub mod assets;
pub mod export;
pub mod render;
pub mod route;
pub mod server;
pub mod state;
pub mod ui;

pub use export::{ExportReport, export_site};
pub use route::{Resolution, Route};
pub use server::{router, serve};
pub use state::SiteState;
