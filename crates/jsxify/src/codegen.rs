//! Concise source printer for the JSX syntax tree.

use std::fmt::Write;

use crate::jsx::{
    Expression, JsxAttribute, JsxAttributeValue, JsxChild, JsxElement, JsxFragment,
    ObjectProperty, Statement,
};

/// Print a statement as source text.
///
/// Expression statements keep their trailing `;`; stripping it is up to the
/// caller.
pub fn generate(statement: &Statement) -> String {
    let mut printer = Printer::default();
    printer.statement(statement);
    printer.out
}

/// Print a single expression as source text.
pub fn generate_expression(expression: &Expression) -> String {
    let mut printer = Printer::default();
    printer.expression(expression);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expression(expression) => {
                self.expression(expression);
                self.out.push(';');
            }
            Statement::Block { inner_comment } => self.braced_comment(inner_comment.as_deref()),
        }
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Element(element) => self.element(element),
            Expression::Fragment(fragment) => self.fragment(fragment),
            Expression::String(value) => self.string_literal(value),
            Expression::Object(properties) => self.object(properties),
            Expression::Empty { inner_comment } => {
                if let Some(comment) = inner_comment {
                    self.comment(comment);
                }
            }
        }
    }

    /// `{ /*comment*/ }`, or `{}` without one.
    fn braced_comment(&mut self, comment: Option<&str>) {
        match comment {
            Some(comment) => {
                self.out.push_str("{ ");
                self.comment(comment);
                self.out.push_str(" }");
            }
            None => self.out.push_str("{}"),
        }
    }

    fn comment(&mut self, comment: &str) {
        // A `*/` inside the body would end the comment early
        self.out.push_str("/*");
        self.out.push_str(&comment.replace("*/", "*\\/"));
        self.out.push_str("*/");
    }

    fn element(&mut self, element: &JsxElement) {
        self.out.push('<');
        self.out.push_str(&element.name);
        for attribute in &element.attributes {
            self.out.push(' ');
            self.attribute(attribute);
        }

        if element.self_closing {
            self.out.push_str(" />");
            return;
        }

        self.out.push('>');
        self.children(&element.children);
        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
    }

    fn fragment(&mut self, fragment: &JsxFragment) {
        self.out.push_str("<>");
        self.children(&fragment.children);
        self.out.push_str("</>");
    }

    fn children(&mut self, children: &[JsxChild]) {
        for child in children {
            match child {
                JsxChild::Element(element) => self.element(element),
                JsxChild::Text(text) => self.out.push_str(text),
                JsxChild::ExpressionContainer(Expression::Empty { inner_comment }) => {
                    self.braced_comment(inner_comment.as_deref())
                }
                JsxChild::ExpressionContainer(expression) => {
                    self.out.push('{');
                    self.expression(expression);
                    self.out.push('}');
                }
            }
        }
    }

    fn attribute(&mut self, attribute: &JsxAttribute) {
        self.out.push_str(&attribute.name);
        self.out.push('=');

        match &attribute.value {
            // JSX attribute strings have no escapes, so a value containing
            // `"` has to go through a string expression
            JsxAttributeValue::String(value) if value.contains('"') => {
                self.out.push('{');
                self.string_literal(value);
                self.out.push('}');
            }
            JsxAttributeValue::String(value) => {
                self.out.push('"');
                self.out.push_str(value);
                self.out.push('"');
            }
            JsxAttributeValue::Expression(expression) => {
                self.out.push('{');
                self.expression(expression);
                self.out.push('}');
            }
        }
    }

    fn object(&mut self, properties: &[ObjectProperty]) {
        if properties.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push_str("{ ");
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            if is_identifier(&property.key) {
                self.out.push_str(&property.key);
            } else {
                self.string_literal(&property.key);
            }
            self.out.push_str(": ");
            self.expression(&property.value);
        }
        self.out.push_str(" }");
    }

    /// Double-quoted string literal with minimal escaping.
    fn string_literal(&mut self, value: &str) {
        self.out.push('"');
        let mut chars = value.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{08}' => self.out.push_str("\\b"),
                '\u{0B}' => self.out.push_str("\\v"),
                '\u{0C}' => self.out.push_str("\\f"),
                '\u{2028}' => self.out.push_str("\\u2028"),
                '\u{2029}' => self.out.push_str("\\u2029"),
                '\0' if !chars.peek().is_some_and(|next| next.is_ascii_digit()) => {
                    self.out.push_str("\\0")
                }
                c if c.is_ascii_control() => {
                    let _ = write!(self.out, "\\x{:02X}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(name: &str, attributes: Vec<JsxAttribute>, children: Vec<JsxChild>) -> JsxElement {
        JsxElement {
            name: name.to_string(),
            attributes,
            self_closing: children.is_empty(),
            children,
        }
    }

    #[test]
    fn prints_self_closing_element() {
        let statement = Statement::Expression(Expression::Element(element("div", vec![], vec![])));
        assert_eq!(generate(&statement), "<div />;");
    }

    #[test]
    fn prints_attributes_and_children() {
        let statement = Statement::Expression(Expression::Element(element(
            "a",
            vec![
                JsxAttribute::string("href", "/x"),
                JsxAttribute::expression(
                    "style",
                    Expression::Object(vec![ObjectProperty::string("color", "red")]),
                ),
            ],
            vec![JsxChild::Text("go".to_string())],
        )));

        assert_eq!(
            generate(&statement),
            r#"<a href="/x" style={{ color: "red" }}>go</a>;"#
        );
    }

    #[test]
    fn prints_fragment() {
        let fragment = Expression::Fragment(JsxFragment {
            children: vec![
                JsxChild::Element(element("br", vec![], vec![])),
                JsxChild::Text(" x ".to_string()),
            ],
        });
        assert_eq!(generate_expression(&fragment), "<><br /> x </>");
    }

    #[test]
    fn prints_comments() {
        let block = Statement::Block {
            inner_comment: Some(" c ".to_string()),
        };
        assert_eq!(generate(&block), "{ /* c */ }");

        let inline = Expression::Element(element(
            "p",
            vec![],
            vec![JsxChild::ExpressionContainer(Expression::Empty {
                inner_comment: Some(" note ".to_string()),
            })],
        ));
        assert_eq!(generate_expression(&inline), "<p>{ /* note */ }</p>");
    }

    #[test]
    fn escapes_string_literals() {
        let literal = Expression::String("say \"hi\"\nback\\slash".to_string());
        assert_eq!(
            generate_expression(&literal),
            r#""say \"hi\"\nback\\slash""#
        );
    }

    #[test]
    fn routes_quoted_attribute_values_through_expression() {
        let element = Expression::Element(element(
            "img",
            vec![JsxAttribute::string("alt", r#"a "b""#)],
            vec![],
        ));
        assert_eq!(generate_expression(&element), r#"<img alt={"a \"b\""} />"#);
    }

    #[test]
    fn quotes_non_identifier_keys() {
        let object = Expression::Object(vec![
            ObjectProperty::string("--main", "red"),
            ObjectProperty::string("__html", "<b />"),
        ]);
        assert_eq!(
            generate_expression(&object),
            r#"{ "--main": "red", __html: "<b />" }"#
        );
        assert_eq!(generate_expression(&Expression::Object(vec![])), "{}");
    }
}
