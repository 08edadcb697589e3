//! The Emitter: a recursive, variant-dispatched tree walker that
//! accumulates JavaScript source text.
//!
//! Each rule appends literal fragments (keywords, punctuation, operators)
//! around recursively emitted children, in left-to-right depth-first
//! order. No formatting is injected, no operator precedence is analyzed;
//! the output reproduces exactly the shape of the tree.

use crate::ast::{Node, Spanned};
use crate::diagnostics::EmitError;

/// Unparses a whole tree into source text.
///
/// # Examples
///
/// ```rust
/// use jscribe::ast::Node;
///
/// let root = Node::Identifier { name: "total".to_string() };
/// assert_eq!(jscribe::emit::unparse(&root).unwrap(), "total");
/// ```
pub fn unparse(root: &Node) -> Result<String, EmitError> {
    Emitter::new().convert(root)
}

/// Accumulates the output of one conversion.
///
/// The buffer lives exactly as long as the conversion: created by
/// [`Emitter::new`], moved out by [`Emitter::convert`] on success, and
/// copied into the diagnostic when a rule refuses to proceed.
#[derive(Debug, Default)]
pub struct Emitter {
    out: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Emits `root` and, transitively, all its descendants, returning the
    /// generated text.
    pub fn convert(mut self, root: &Node) -> Result<String, EmitError> {
        self.emit_node(root)?;
        Ok(self.out)
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    fn emit_node(&mut self, node: &Node) -> Result<(), EmitError> {
        match node {
            Node::ArrayExpression { elements } => {
                self.out.push('[');
                self.emit_separated(elements)?;
                self.out.push(']');
            }
            Node::ArrowFunctionExpression { params, body } => {
                self.out.push('(');
                self.emit_separated(params)?;
                self.out.push_str(") => ");
                self.emit_node(body)?;
            }
            Node::AssignmentExpression {
                left,
                operator,
                right,
            } => self.emit_infix(left, operator, right)?,
            Node::BinaryExpression {
                left,
                operator,
                right,
            } => self.emit_infix(left, operator, right)?,
            Node::BlockStatement { body } => {
                self.out.push('{');
                for statement in body {
                    self.emit_node(statement)?;
                }
                self.out.push('}');
            }
            Node::BreakStatement {} => self.out.push_str("break"),
            Node::CallExpression { callee, arguments } => {
                self.emit_node(callee)?;
                self.out.push('(');
                self.emit_separated(arguments)?;
                self.out.push(')');
            }
            Node::ExpressionStatement { expression } => {
                self.emit_node(expression)?;
                self.out.push(';');
            }
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                self.out.push_str("for (");
                self.emit_node(init)?;
                self.out.push(';');
                self.emit_node(test)?;
                self.out.push(';');
                self.emit_node(update)?;
                self.out.push(')');
                self.emit_node(body)?;
            }
            Node::FunctionDeclaration { id, params, body } => {
                self.out.push_str("function ");
                self.emit_node(id)?;
                self.out.push('(');
                // Parameter lists are a hard limitation: refuse rather
                // than emit text the tree does not back.
                if !params.is_empty() {
                    return Err(EmitError::FunctionParams {
                        partial: self.out.clone(),
                    });
                }
                self.out.push(')');
                self.emit_node(body)?;
            }
            Node::FunctionExpression { body } => {
                // A function expression degenerates to its body; the
                // name and parameter list are never serialized.
                self.emit_node(body)?;
            }
            Node::Identifier { name } => self.out.push_str(name),
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                self.out.push_str("if(");
                self.emit_node(test)?;
                self.out.push(')');
                self.emit_node(consequent)?;
                if let Some(alternate) = alternate {
                    self.out.push_str("else");
                    self.emit_node(alternate)?;
                }
            }
            Node::Literal { value } => self.emit_literal(value),
            Node::MemberExpression { object, property } => {
                match object.as_ref() {
                    Node::Identifier { name } => self.out.push_str(name),
                    expression => self.emit_node(expression)?,
                }
                let name = self.identifier_name(property, "member access")?;
                self.out.push('.');
                self.out.push_str(name);
            }
            Node::NewExpression { arguments } => {
                // Observed behavior, preserved: only the argument list is
                // serialized; neither the `new` keyword nor the callee.
                self.out.push('(');
                self.emit_separated(arguments)?;
                self.out.push(')');
            }
            Node::Program { body } => {
                for statement in body {
                    self.emit_node(statement)?;
                    self.out.push('\n');
                }
            }
            Node::ReturnStatement { argument } => {
                self.out.push_str("return ");
                self.emit_node(argument)?;
            }
            Node::TemplateElement { value } => self.out.push_str(&value.raw),
            Node::TemplateLiteral {
                expressions,
                quasis,
            } => self.emit_template(expressions, quasis)?,
            Node::UpdateExpression { argument, operator } => {
                // Postfix form only: `x++`, never `++x`.
                let name = self.identifier_name(argument, "update expression")?;
                self.out.push_str(name);
                self.out.push_str(operator);
            }
            Node::VariableDeclaration { kind, declarations } => {
                self.out.push_str(kind);
                self.out.push(' ');
                // Declarators are concatenated with no separator; more
                // than one produces text that will not re-parse. Observed
                // behavior, preserved.
                for declarator in declarations {
                    self.emit_node(declarator)?;
                }
                self.out.push(';');
            }
            Node::VariableDeclarator { id, init } => {
                self.emit_node(id)?;
                self.out.push('=');
                self.emit_node(init)?;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Shared rules
    // ------------------------------------------------------------------------

    /// Infix rule shared by assignment and binary expressions: left
    /// operand, operator string verbatim with no surrounding spaces,
    /// right operand. Nested mixed-precedence trees come out without
    /// disambiguating parentheses.
    fn emit_infix(&mut self, left: &Node, operator: &str, right: &Node) -> Result<(), EmitError> {
        self.emit_node(left)?;
        self.out.push_str(operator);
        self.emit_node(right)
    }

    /// Emits `items` joined by commas: N items, N-1 separators, never a
    /// trailing comma.
    fn emit_separated(&mut self, items: &[Node]) -> Result<(), EmitError> {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.out.push(',');
            }
            self.emit_node(item)?;
        }
        Ok(())
    }

    /// Merges the expression and quasi lists into one sequence ordered by
    /// ascending `start` (the sort is stable, so expressions win ties)
    /// and emits the interleaving between backticks.
    fn emit_template(
        &mut self,
        expressions: &[Spanned<Node>],
        quasis: &[Spanned<Node>],
    ) -> Result<(), EmitError> {
        self.out.push('`');
        let mut parts: Vec<&Spanned<Node>> = expressions.iter().chain(quasis.iter()).collect();
        parts.sort_by_key(|part| part.start);
        for part in parts {
            match &part.node {
                element @ Node::TemplateElement { .. } => self.emit_node(element)?,
                expression => {
                    self.out.push_str("${");
                    self.emit_node(expression)?;
                    self.out.push('}');
                }
            }
        }
        self.out.push('`');
        Ok(())
    }

    /// Returns the name of an identifier node, refusing any other kind.
    fn identifier_name<'n>(
        &self,
        node: &'n Node,
        context: &'static str,
    ) -> Result<&'n str, EmitError> {
        match node {
            Node::Identifier { name } => Ok(name),
            other => Err(EmitError::ExpectedIdentifier {
                context,
                kind: other.kind(),
                partial: self.out.clone(),
            }),
        }
    }

    /// Textual values are wrapped in double quotes with no escaping of
    /// embedded quote characters; everything else renders via its
    /// canonical compact form (`42`, `2.5`, `true`, `null`).
    fn emit_literal(&mut self, value: &serde_json::Value) {
        match value {
            serde_json::Value::String(text) => {
                self.out.push('"');
                self.out.push_str(text);
                self.out.push('"');
            }
            other => self.out.push_str(&other.to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
