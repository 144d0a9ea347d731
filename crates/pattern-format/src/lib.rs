//! Pattern file format for Pattern Studio.
//!
//! A pattern file is a PHP-style file whose doc comment carries the pattern
//! metadata and whose body, after the closing `?>`, carries the block markup:
//!
//! ```text
//! <?php
//! /**
//!  * Title: Hero Banner
//!  * Slug: hero-banner
//!  * Categories: featured, banner
//!  * Viewport Width: 1280
//!  * Inserter: true
//!  */
//!
//! ?>
//! <!-- wp:cover /-->
//! ```
//!
//! [`serialize`] and [`deserialize`] are inverse for every record that passes
//! [`PatternRecord::validate`](pattern_meta::PatternRecord::validate).

pub mod error;
pub mod header;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use header::HeaderField;
pub use parser::deserialize;
pub use writer::serialize;
