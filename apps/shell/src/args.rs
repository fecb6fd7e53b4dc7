//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "rankctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and normalize organization rank documents")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `central.*` in the working directory, if any)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands. `FILE` may be `-` to read standard input.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Decode a document and list its ranks, flagging stale embedded records
    Check {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Re-encode a document: nulls dropped, keys in canonical order
    Normalize {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the write payload (id, code, name, unitId, order) of every rank
    Input {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}
