//! Defines the command-line arguments for the jscribe CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create
//! a declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "jscribe",
    version,
    about = "Convert a JSON-encoded syntax tree back into JavaScript source text."
)]
pub struct JscribeArgs {
    /// Path to the JSON file holding the syntax tree.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Write the generated source to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
