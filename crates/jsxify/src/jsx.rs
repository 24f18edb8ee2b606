//! JSX syntax tree produced by conversion and consumed by [`crate::codegen`].

/// A whole converted program: one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A single expression, printed with a trailing `;`.
    Expression(Expression),

    /// An empty block used to carry a root-level comment.
    Block { inner_comment: Option<String> },
}

/// Expressions that can appear in the output.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Element(JsxElement),
    Fragment(JsxFragment),
    String(String),
    Object(Vec<ObjectProperty>),

    /// The empty expression inside `{}`; only meaningful with a comment.
    Empty { inner_comment: Option<String> },
}

/// A `key: value` entry of an object expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expression,
}

impl ObjectProperty {
    /// A property with a string literal value.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Expression::String(value.into()),
        }
    }
}

/// A JSX element. The closing tag always repeats `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    pub self_closing: bool,
    pub children: Vec<JsxChild>,
}

/// `<>...</>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsxFragment {
    pub children: Vec<JsxChild>,
}

/// Anything that can sit between an opening and a closing tag.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxChild {
    Element(JsxElement),
    ExpressionContainer(Expression),
    /// Already-encoded JSX text, printed verbatim.
    Text(String),
}

impl JsxChild {
    /// Whether this child would print as nothing at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, JsxChild::Text(text) if text.is_empty())
    }
}

/// A JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    pub name: String,
    pub value: JsxAttributeValue,
}

impl JsxAttribute {
    /// `name="value"`
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: JsxAttributeValue::String(value.into()),
        }
    }

    /// `name={expression}`
    pub fn expression(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            name: name.into(),
            value: JsxAttributeValue::Expression(expression),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeValue {
    String(String),
    Expression(Expression),
}
