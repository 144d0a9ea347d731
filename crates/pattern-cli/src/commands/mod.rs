//! Command implementations for pattern-cli

pub mod add;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod query;
pub mod show;
pub mod status;

pub use add::run_add;
pub use export::run_export;
pub use import::run_import;
pub use init::run_init;
pub use list::run_list;
pub use query::run_query;
pub use show::run_show;
pub use status::run_status;
