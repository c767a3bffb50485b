//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relay connection and global id toolkit
#[derive(Parser, Debug)]
#[command(name = "relay-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination policy file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a type name and a local id into a global id
    Encode {
        /// Type name (e.g. "User")
        type_name: String,

        /// Id local to the type
        id: String,
    },

    /// Decode a global id into its type name and local id
    Decode {
        /// Opaque global id
        global_id: String,
    },

    /// Paginate a JSON array of objects
    Paginate {
        /// Input file holding a JSON array ("-" reads stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Field holding each object's identity (string or number)
        #[arg(long, default_value = "id")]
        id_field: String,

        /// Return the first N edges
        #[arg(long, allow_negative_numbers = true)]
        first: Option<i32>,

        /// Return the last N edges
        #[arg(long, allow_negative_numbers = true)]
        last: Option<i32>,

        /// Start at this cursor
        #[arg(long)]
        after: Option<String>,

        /// End at this cursor
        #[arg(long)]
        before: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on a single line
    Json,
    /// Indented JSON
    Pretty,
}
