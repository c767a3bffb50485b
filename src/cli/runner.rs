//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PaginationConfig};
use crate::error::{Error, Result, ResultExt};
use crate::global_id::{to_global_id, GlobalId};
use crate::pagination::{Edge, PageArgs, Paginator};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Encode { type_name, id } => {
                writeln!(out, "{}", to_global_id(type_name, id))?;
                Ok(())
            }
            Commands::Decode { global_id } => {
                let decoded: GlobalId = global_id.parse()?;
                self.write_json(out, &decoded)
            }
            Commands::Paginate {
                input,
                id_field,
                first,
                last,
                after,
                before,
            } => {
                let args = PageArgs {
                    before: before.clone(),
                    after: after.clone(),
                    first: *first,
                    last: *last,
                };
                self.paginate(out, input, id_field, &args)
            }
        }
    }

    /// Load the pagination policy, permissive when no file is given
    fn load_config(&self) -> Result<PaginationConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(PaginationConfig::default()),
        }
    }

    fn paginate<W: Write>(
        &self,
        out: &mut W,
        input: &Path,
        id_field: &str,
        args: &PageArgs,
    ) -> Result<()> {
        let paginator = Paginator::new(self.load_config()?);
        let edges = read_edges(input, id_field)?;
        debug!(
            edges = edges.len(),
            strict = paginator.config().is_strict(),
            "Paginating input"
        );

        let connection = paginator.window(&edges, args)?;
        self.write_json(out, &connection)
    }

    fn write_json<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

/// Read a JSON array and pair every object with the cursor found in `id_field`
fn read_edges(input: &Path, id_field: &str) -> Result<Vec<Edge<Value>>> {
    let content = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: input.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?
    };

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to read nodes from '{}'", input.display()))?;
    let Value::Array(nodes) = value else {
        return Err(Error::config("Input must be a JSON array of objects"));
    };

    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let cursor = match node.get(id_field) {
                Some(Value::String(id)) => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => {
                    return Err(Error::MissingNodeId {
                        index,
                        field: id_field.to_string(),
                    })
                }
            };
            Ok(Edge::new(node, cursor))
        })
        .collect()
}
