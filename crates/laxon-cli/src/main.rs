//! `laxon` CLI — validate, normalize and convert laxon documents from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (stdin → exit code)
//! echo "{'name': 'Alice'}" | laxon check
//!
//! # Normalize to canonical single-quoted form
//! laxon fmt -i data.laxon -o canonical.laxon
//!
//! # Convert laxon to strict JSON (pretty-printed by default)
//! echo "[1, 'two', undefined]" | laxon to-json
//!
//! # Convert strict JSON to laxon
//! laxon from-json -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use laxon_core::Value;

#[derive(Parser)]
#[command(name = "laxon", version, about = "Lenient JSON dialect codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate laxon input
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse and re-serialize to the canonical single-quoted form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert laxon to strict JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
    /// Convert strict JSON to laxon
    FromJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            laxon_core::parse(&text).context("Input is not valid laxon")?;
            println!("OK");
        }
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = laxon_core::parse(&text).context("Failed to parse laxon input")?;
            write_output(output.as_deref(), &laxon_core::stringify(&value))?;
        }
        Commands::ToJson {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let value = laxon_core::parse(&text).context("Failed to parse laxon input")?;
            let json = serde_json::Value::try_from(&value)
                .context("Document has no strict JSON form")?;
            let rendered = if compact {
                serde_json::to_string(&json)?
            } else {
                serde_json::to_string_pretty(&json)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::FromJson { input, output } => {
            let text = read_input(input.as_deref())?;
            let json: serde_json::Value =
                serde_json::from_str(&text).context("Input is not valid JSON")?;
            let value = Value::from(json);
            write_output(output.as_deref(), &laxon_core::stringify(&value))?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
