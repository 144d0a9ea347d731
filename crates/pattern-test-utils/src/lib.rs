//! Shared test utilities for the Pattern Studio workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`theme`]: [`TestTheme`] builder for a project directory on disk
//! - [`memory`]: [`MemoryFileStore`], an in-memory `FileStore` with
//!   injectable failures

pub mod memory;
pub mod theme;

pub use memory::MemoryFileStore;
pub use theme::TestTheme;
