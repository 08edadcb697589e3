//! AST model for the jscribe unparser.
//!
//! The set of recognized node kinds is closed: a JSON object whose `type`
//! tag is not one of the 23 variants below is rejected at decode time,
//! before any field of the node is read. Exhaustive matching in the
//! emitter then guarantees every decoded kind has a serialization rule.

use serde::Deserialize;

use crate::diagnostics::JscribeError;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A syntax tree node, discriminated by the `type` field of its JSON
/// encoding.
///
/// Only the fields a kind's emission rule consumes are modeled; every
/// other key (`start`, `end`, `loc`, a `NewExpression`'s `callee`, ...)
/// is ignored by the decoder. A node missing a required field is
/// malformed and fails to decode. Ownership is strictly parent-to-child:
/// nodes form a tree, never a graph.
///
/// # Examples
///
/// ```rust
/// use jscribe::ast::Node;
///
/// let node: Node = serde_json::from_str(r#"{"type":"Identifier","name":"x"}"#).unwrap();
/// assert_eq!(node, Node::Identifier { name: "x".to_string() });
/// assert_eq!(node.kind(), "Identifier");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    ArrayExpression {
        elements: Vec<Node>,
    },
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
    },
    AssignmentExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    BinaryExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    BreakStatement {},
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    ForStatement {
        init: Box<Node>,
        test: Box<Node>,
        update: Box<Node>,
        body: Box<Node>,
    },
    FunctionDeclaration {
        id: Box<Node>,
        params: Vec<Node>,
        body: Box<Node>,
    },
    FunctionExpression {
        body: Box<Node>,
    },
    Identifier {
        name: String,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    Literal {
        value: serde_json::Value,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
    },
    NewExpression {
        arguments: Vec<Node>,
    },
    Program {
        body: Vec<Node>,
    },
    ReturnStatement {
        argument: Box<Node>,
    },
    TemplateElement {
        value: TemplateValue,
    },
    TemplateLiteral {
        expressions: Vec<Spanned<Node>>,
        quasis: Vec<Spanned<Node>>,
    },
    UpdateExpression {
        argument: Box<Node>,
        operator: String,
    },
    VariableDeclaration {
        kind: String,
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Box<Node>,
    },
}

/// Wrapper for the children of a template literal, which carry the
/// `start` offset their interleaving is ordered by. The wrapped node's
/// own fields sit flattened next to `start` in the JSON object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spanned<T> {
    pub start: u64,
    #[serde(flatten)]
    pub node: T,
}

/// The `value` record of a `TemplateElement`. Only the raw text is
/// consumed; the `cooked` form is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateValue {
    pub raw: String,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Node {
    /// Returns the kind tag of this node as it appears in the JSON
    /// encoding.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::ArrayExpression { .. } => "ArrayExpression",
            Node::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            Node::AssignmentExpression { .. } => "AssignmentExpression",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::BlockStatement { .. } => "BlockStatement",
            Node::BreakStatement {} => "BreakStatement",
            Node::CallExpression { .. } => "CallExpression",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::ForStatement { .. } => "ForStatement",
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
            Node::FunctionExpression { .. } => "FunctionExpression",
            Node::Identifier { .. } => "Identifier",
            Node::IfStatement { .. } => "IfStatement",
            Node::Literal { .. } => "Literal",
            Node::MemberExpression { .. } => "MemberExpression",
            Node::NewExpression { .. } => "NewExpression",
            Node::Program { .. } => "Program",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::TemplateElement { .. } => "TemplateElement",
            Node::TemplateLiteral { .. } => "TemplateLiteral",
            Node::UpdateExpression { .. } => "UpdateExpression",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
        }
    }
}

/// Decodes a JSON document into a [`Node`] tree.
///
/// `origin` names the input in diagnostics. Unknown kind tags and
/// malformed nodes are rejected here, before the emitter ever runs.
pub fn from_json(source: &str, origin: &str) -> Result<Node, JscribeError> {
    serde_json::from_str(source).map_err(|error| JscribeError::decode(source, origin, error))
}

// ============================================================================
// TESTS
// ============================================================================
