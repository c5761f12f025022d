//! Command handlers for CLI subcommands
//!
//! Each handler takes its parsed arguments, the effective configuration
//! and an output writer, and returns once its output has been written.

mod completions;
mod config;
mod convert;
mod resolve;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use convert::handle_convert;
pub use resolve::handle_resolve;
pub use validate::handle_validate;
