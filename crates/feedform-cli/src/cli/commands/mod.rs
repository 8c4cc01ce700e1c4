//! CLI command handlers. Each command is in its own file.

mod build;
mod fetch;
mod keys;
mod show;

pub use build::run_build;
pub use fetch::run_fetch;
pub use keys::run_keys;
pub use show::run_show;
