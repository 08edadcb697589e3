//! Unified miette-based diagnostics for jscribe.
//!
//! Every failure mode of the tool is represented here: boundary errors
//! raised before conversion, decode errors positioned inside the JSON
//! input, and emission-time refusals that carry the partially generated
//! text. There is no local recovery anywhere; every error aborts the
//! whole conversion. A partially correct program text is strictly worse
//! than no output.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Top-level error type for all jscribe failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum JscribeError {
    /// The input path does not exist. Checked before any read.
    #[error("file not found: {}", path.display())]
    #[diagnostic(code(jscribe::cli::input))]
    InputNotFound { path: PathBuf },

    /// The input path exists but does not name a regular file.
    #[error("{} is not a file", path.display())]
    #[diagnostic(code(jscribe::cli::input))]
    InputNotAFile { path: PathBuf },

    /// Reading the input or writing the destination failed.
    #[error("cannot access {}", path.display())]
    #[diagnostic(code(jscribe::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document does not decode into a recognized tree: an
    /// unknown kind tag, a malformed node missing a required field, or
    /// plain invalid JSON.
    #[error("invalid syntax tree: {message}")]
    #[diagnostic(code(jscribe::decode))]
    Decode {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] EmitError),
}

impl JscribeError {
    /// Wraps a serde_json failure with the input it came from, turning
    /// the reported line/column into a labeled span over that input.
    pub fn decode(source: &str, origin: &str, error: serde_json::Error) -> Self {
        let offset = position_offset(source, error.line(), error.column());
        let length = usize::from(offset < source.len());
        let mut message = error.to_string();
        // serde_json appends " at line L column C"; the label already
        // points there.
        if let Some(position) = message.find(" at line ") {
            message.truncate(position);
        }
        JscribeError::Decode {
            message,
            src: NamedSource::new(origin, source.to_string()),
            span: (offset, length).into(),
        }
    }
}

/// Failures raised while walking an already-decoded tree.
///
/// Each variant carries the text generated before the rule refused, and
/// surfaces it through the diagnostic help.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    /// A `FunctionDeclaration` with a non-empty parameter list. This is
    /// a hard, deliberate limitation of the tool.
    #[error("function declaration parameters are not supported")]
    #[diagnostic(
        code(jscribe::emit::function_params),
        help("output generated before the failure:\n{partial}")
    )]
    FunctionParams { partial: String },

    /// A rule that requires a plain identifier (an update target, a
    /// member property) met some other kind.
    #[error("{context} requires an identifier, found {kind}")]
    #[diagnostic(
        code(jscribe::emit::expected_identifier),
        help("output generated before the failure:\n{partial}")
    )]
    ExpectedIdentifier {
        context: &'static str,
        kind: &'static str,
        partial: String,
    },
}

/// Maps serde_json's one-based line/column position to a byte offset
/// into `source`, clamped to the source length. Line 0 means the error
/// carried no position.
fn position_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            return (offset + column.saturating_sub(1).min(text.len())).min(source.len());
        }
        offset += text.len() + 1;
    }
    source.len()
}
