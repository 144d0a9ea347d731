//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use pattern_meta::Mode;

/// Pattern Studio - Author block patterns and keep pattern files in sync
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize Pattern Studio in the current directory
    ///
    /// Creates .patterns/config.toml and the pattern directory.
    Init {
        /// Storage mode (file or api). Derived from PATTERN_STUDIO_ENV when omitted
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Pattern directory, relative to the project root
        #[arg(short, long, default_value = "patterns")]
        directory: String,

        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Create or update a pattern (matched by slug)
    Add(AddArgs),

    /// Print the pattern file for a stored pattern
    Show {
        /// Pattern slug
        slug: String,
    },

    /// Write stored patterns to pattern files
    ///
    /// Exports every pattern when no slug is given.
    Export {
        /// Pattern slugs to export
        slugs: Vec<String>,
    },

    /// Import pattern files into the record store
    Import {
        /// Pattern files to import
        files: Vec<PathBuf>,

        /// Import every file in the pattern directory
        #[arg(long, conflicts_with = "files")]
        all: bool,
    },

    /// Show project status and pattern files
    Status,

    /// List stored patterns
    List,

    /// Query stored patterns as JSON (api mode only)
    Query {
        /// Case-insensitive text search
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<usize>,

        /// Results per page
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Arguments for `patterns add`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Pattern title (the slug is derived from it)
    #[arg(short, long)]
    pub title: String,

    /// Short description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Category (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Keyword (repeatable)
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Block type the pattern applies to (repeatable)
    #[arg(long = "block-type", value_name = "BLOCK_TYPE")]
    pub block_types: Vec<String>,

    /// Post type the pattern applies to (repeatable)
    #[arg(long = "post-type", value_name = "POST_TYPE")]
    pub post_types: Vec<String>,

    /// Template type the pattern applies to (repeatable)
    #[arg(long = "template-type", value_name = "TEMPLATE_TYPE")]
    pub template_types: Vec<String>,

    /// Preview viewport width in pixels
    #[arg(long)]
    pub viewport_width: Option<u32>,

    /// Hide the pattern from the inserter
    #[arg(long)]
    pub hidden: bool,

    /// Block markup
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read block markup from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}
