//! Convert HTML fragments into equivalent JSX source.
//!
//! Markup is parsed with html5ever, converted node by node into a small JSX
//! syntax tree, and printed back as concise source. Attribute names are
//! translated to their JSX spelling, `style` strings become objects and the
//! contents of `<pre>` are passed through as raw HTML.

pub mod attributes;
pub mod codegen;
pub mod convert;
pub mod entities;
pub mod error;
pub mod jsx;
pub mod markup;
pub mod text;

pub use attributes::{convert_attributes, ATTRIBUTE_NAMES};
pub use codegen::generate;
pub use convert::{convert, to_children, to_statement, wrap_with_fragment};
pub use error::ConvertError;
pub use jsx::{Expression, JsxAttribute, JsxAttributeValue, JsxChild, JsxElement, Statement};
pub use markup::{AttributeValue, MarkupNode};
pub use text::encode_text;
