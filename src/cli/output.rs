//! Handles the user-facing output of the CLI.
//!
//! The generated script either lands in a destination file (`-o`) or on
//! the standard output stream; this module is the only place that
//! decides which.

use std::fs;
use std::path::Path;

use crate::diagnostics::JscribeError;

/// Writes the generated script to `target`, or to stdout when no target
/// was given. Stdout output gains one trailing newline; file output is
/// written verbatim.
pub fn write_script(target: Option<&Path>, script: &str) -> Result<(), JscribeError> {
    match target {
        Some(path) => fs::write(path, script).map_err(|source| JscribeError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{script}");
            Ok(())
        }
    }
}
