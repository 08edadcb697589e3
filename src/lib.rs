pub use crate::diagnostics::{EmitError, JscribeError};

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod emit;

/// Decodes a JSON-encoded syntax tree and unparses it into JavaScript
/// source text.
///
/// `origin` names the input in diagnostics (the CLI passes the file path).
///
/// # Examples
///
/// ```rust
/// let script = jscribe::convert(r#"{"type":"Identifier","name":"total"}"#, "inline").unwrap();
/// assert_eq!(script, "total");
/// ```
pub fn convert(source: &str, origin: &str) -> Result<String, JscribeError> {
    let root = ast::from_json(source, origin)?;
    Ok(emit::unparse(&root)?)
}
