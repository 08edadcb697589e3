//! The jscribe command-line interface.
//!
//! This module is the entry point for the binary and orchestrates the
//! boundary work around the library: argument parsing, input
//! preconditions, JSON decoding, and output routing.

use std::fs;
use std::path::Path;

use clap::Parser;

use crate::ast::{self, Node};
use crate::cli::args::JscribeArgs;
use crate::diagnostics::JscribeError;
use crate::emit;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
///
/// Failures surface as miette reports and make the process exit
/// non-zero; on any failure no output file is produced.
pub fn run() -> miette::Result<()> {
    let args = JscribeArgs::parse();

    let root = load_tree(&args.file)?;
    let script = emit::unparse(&root).map_err(JscribeError::from)?;
    output::write_script(args.output.as_deref(), &script)?;

    Ok(())
}

/// Reads and decodes the input tree, enforcing the boundary
/// preconditions first: the path must exist and must name a regular
/// file. Violations are reported before any conversion is attempted.
fn load_tree(path: &Path) -> Result<Node, JscribeError> {
    if !path.exists() {
        return Err(JscribeError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(JscribeError::InputNotAFile {
            path: path.to_path_buf(),
        });
    }
    let source = fs::read_to_string(path).map_err(|source| JscribeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ast::from_json(&source, &path.display().to_string())
}
