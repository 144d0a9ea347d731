//! Configuration resolution
//!
//! Types live in `pattern_meta::config`; this module finds and merges the
//! TOML layers that produce them.

mod resolver;

pub use resolver::ConfigResolver;
