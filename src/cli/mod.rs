//! CLI module
//!
//! Command-line interface for inspecting connections and global ids.
//!
//! # Commands
//!
//! - `encode` - Build a global id from a type name and a local id
//! - `decode` - Split a global id back into its parts
//! - `paginate` - Window a JSON array into a connection

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
