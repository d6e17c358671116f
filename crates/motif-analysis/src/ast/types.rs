//! Component syntax node types: the handful of shapes fingerprinting cares
//! about, plus an `Other` catch-all that keeps every subtree reachable.

use serde::{Deserialize, Serialize};

/// Normalized syntax node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentNode {
    Program {
        body: Vec<ComponentNode>,
    },
    /// `export default <target>`.
    ExportDefault {
        target: Box<ComponentNode>,
    },
    Function {
        kind: FunctionKind,
        name: Option<String>,
        params: Vec<ParamPattern>,
        children: Vec<ComponentNode>,
    },
    Class {
        name: Option<String>,
        children: Vec<ComponentNode>,
    },
    Identifier {
        name: String,
    },
    /// A rendered-tree node: JSX element, self-closing element, or fragment.
    JsxElement {
        /// `None` for fragments.
        tag: Option<String>,
        attributes: Vec<JsxAttribute>,
        self_closing: bool,
        children: Vec<ComponentNode>,
    },
    Other {
        kind: String,
        children: Vec<ComponentNode>,
    },
}

/// How a function was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// `function Foo() {}`, including a function that is the target of
    /// `export default`.
    Declaration,
    Expression,
    Arrow,
    Method,
}

/// Shape of one formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamPattern {
    Identifier(String),
    /// Object destructuring; holds the property keys in source order.
    Object(Vec<String>),
    /// Array destructuring, rest parameters, `this`.
    Unsupported,
}

impl ParamPattern {
    /// Names this parameter contributes to a prop set.
    pub fn prop_names(&self) -> &[String] {
        match self {
            Self::Identifier(name) => std::slice::from_ref(name),
            Self::Object(keys) => keys,
            Self::Unsupported => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsxAttribute {
    Named { name: String, value: JsxAttrValue },
    /// `{...props}`; `expression` is the whitespace-collapsed source text.
    Spread {
        expression: String,
        inner: Vec<ComponentNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsxAttrValue {
    /// Boolean shorthand: `<input disabled />`.
    Flag,
    StringLiteral(String),
    Expression {
        text: String,
        inner: Vec<ComponentNode>,
    },
    Element(Box<ComponentNode>),
}

impl ComponentNode {
    /// Kind name of this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::Program { .. } => "program",
            Self::ExportDefault { .. } => "export_default",
            Self::Function { .. } => "function",
            Self::Class { .. } => "class",
            Self::Identifier { .. } => "identifier",
            Self::JsxElement { .. } => "jsx_element",
            Self::Other { kind, .. } => kind,
        }
    }

    /// Name of a declaration that can be default-exported. Only named
    /// functions (declarations or expressions), named classes, and bare
    /// identifiers qualify.
    pub fn exported_name(&self) -> Option<&str> {
        match self {
            Self::Identifier { name } => Some(name),
            Self::Function {
                kind: FunctionKind::Declaration | FunctionKind::Expression,
                name: Some(name),
                ..
            } => Some(name),
            Self::Class { name: Some(name), .. } => Some(name),
            Self::Function { .. }
            | Self::Class { .. }
            | Self::Program { .. }
            | Self::ExportDefault { .. }
            | Self::JsxElement { .. }
            | Self::Other { .. } => None,
        }
    }
}
