//! Shared test utilities for the reflow-markdown workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: before/after Markdown fixture pairs and settings directives
//! - [`workspace`]: [`TempWorkspace`] for tests that need files on disk

pub mod fixtures;
pub mod workspace;

pub use fixtures::{FixturePair, settings_directive};
pub use workspace::TempWorkspace;
