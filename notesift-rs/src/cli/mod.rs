//! CLI command implementations.

pub mod args;
pub mod output;

pub mod delete;
pub mod list;
pub mod search;
pub mod show;

pub use args::{Cli, Commands};
pub use output::Output;
