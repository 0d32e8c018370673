//! `agentdump` CLI — convert repr-style agent runtime dumps to JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical JSON from a dump (stdin → stdout)
//! echo "AssistantMessage(content=[TextBlock(text='hi')])" | agentdump json
//!
//! # Raw parse tree, without canonicalization
//! agentdump json --raw -i turn.dump
//!
//! # Minified output to a file
//! agentdump json --compact -i turn.dump -o turn.json
//!
//! # Syntax check only (exit code reports the verdict)
//! agentdump check -i turn.dump
//! ```

use agentdump_core::{parse as parse_dump, transform};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "agentdump",
    version,
    about = "Convert repr-style agent runtime dumps to JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a dump to JSON (canonical message shapes by default)
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit the raw parse tree without canonicalization
        #[arg(long)]
        raw: bool,
        /// Minify instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
    /// Parse a dump and report success or the exact failure offset
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Json {
            input,
            output,
            raw,
            compact,
        } => {
            let dump = read_input(input.as_deref())?;
            let mut value = parse_dump(&dump).context("failed to parse dump")?;
            if !raw {
                value = transform(value);
            }
            let json = if compact {
                value.to_json()
            } else {
                value.to_json_pretty()
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let dump = read_input(input.as_deref())?;
            parse_dump(&dump).context("dump is not valid")?;
            println!("ok");
        }
    }

    Ok(())
}

/// Read the dump from a file, or from stdin when no path was given.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, json: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {path}")),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
