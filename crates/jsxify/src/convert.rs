//! HTML to JSX conversion.

use crate::attributes::convert_attributes;
use crate::codegen::generate;
use crate::error::ConvertError;
use crate::jsx::{
    Expression, JsxAttribute, JsxChild, JsxElement, JsxFragment, ObjectProperty, Statement,
};
use crate::markup::{self, AttributeValue, MarkupNode};
use crate::text::encode_text;

/// Element whose children are passed through as raw markup.
pub const RAW_CONTENT_TAG: &str = "pre";

/// Attribute used to inject raw markup.
pub const RAW_HTML_ATTRIBUTE: &str = "dangerouslySetInnerHTML";

/// Convert an HTML fragment into JSX source.
///
/// Returns `Ok(None)` when the input is missing, empty or only whitespace.
/// Several top-level nodes are wrapped in a fragment; a single one never is.
///
/// ```
/// assert_eq!(
///     jsxify::convert(r#"<div class="box"></div>"#).unwrap().as_deref(),
///     Some(r#"<div className="box" />"#)
/// );
/// assert_eq!(jsxify::convert(None).unwrap(), None);
/// ```
pub fn convert<'a>(html: impl Into<Option<&'a str>>) -> Result<Option<String>, ConvertError> {
    let Some(html) = html.into().map(str::trim).filter(|html| !html.is_empty()) else {
        return Ok(None);
    };

    let nodes = markup::parse(html);
    tracing::debug!(nodes = nodes.len(), "parsed markup");

    let statement = wrap_with_fragment(&nodes)?;

    let mut source = generate(&statement);
    if source.ends_with(';') {
        source.pop();
    }

    Ok(Some(source))
}

/// Turn a top-level node list into one statement.
pub fn wrap_with_fragment(nodes: &[MarkupNode]) -> Result<Statement, ConvertError> {
    if let [node] = nodes {
        return to_statement(node);
    }

    let mut children = Vec::new();
    for node in nodes {
        children.extend(to_children(node)?);
    }

    Ok(Statement::Expression(Expression::Fragment(JsxFragment {
        children,
    })))
}

/// Convert a node that stands alone as the whole program.
pub fn to_statement(node: &MarkupNode) -> Result<Statement, ConvertError> {
    match node {
        MarkupNode::Element {
            name,
            attributes,
            children,
        } => Ok(Statement::Expression(Expression::Element(build_element(
            name, attributes, children,
        )?))),
        // String literal escaping is enough at the root
        MarkupNode::Text(text) => Ok(Statement::Expression(Expression::String(text.clone()))),
        MarkupNode::Comment(body) => Ok(Statement::Block {
            inner_comment: Some(body.clone()),
        }),
        other => Err(ConvertError::UnsupportedNodeKind(other.kind().to_string())),
    }
}

/// Convert a node that sits among siblings.
pub fn to_children(node: &MarkupNode) -> Result<Vec<JsxChild>, ConvertError> {
    match node {
        MarkupNode::Element {
            name,
            attributes,
            children,
        } => Ok(vec![JsxChild::Element(build_element(
            name, attributes, children,
        )?)]),
        MarkupNode::Text(text) => Ok(vec![JsxChild::Text(encode_text(text))]),
        MarkupNode::Comment(body) => Ok(vec![JsxChild::ExpressionContainer(Expression::Empty {
            inner_comment: Some(body.clone()),
        })]),
        other => Err(ConvertError::UnsupportedNodeKind(other.kind().to_string())),
    }
}

fn build_element(
    name: &str,
    attributes: &[(String, AttributeValue)],
    children: &[MarkupNode],
) -> Result<JsxElement, ConvertError> {
    if name == RAW_CONTENT_TAG {
        let html = markup::serialize(children)?;

        let mut attributes = convert_attributes(attributes);
        attributes.push(JsxAttribute::expression(
            RAW_HTML_ATTRIBUTE,
            Expression::Object(vec![ObjectProperty::string("__html", html)]),
        ));

        return Ok(JsxElement {
            name: name.to_string(),
            attributes,
            self_closing: true,
            children: Vec::new(),
        });
    }

    let mut converted = Vec::with_capacity(children.len());
    for child in children {
        converted.extend(to_children(child)?);
    }
    converted.retain(|child| !child.is_empty());

    Ok(JsxElement {
        name: name.to_string(),
        attributes: convert_attributes(attributes),
        self_closing: children.is_empty(),
        children: converted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_input_has_no_output() {
        assert_eq!(convert(None).unwrap(), None);
        assert_eq!(convert("").unwrap(), None);
        assert_eq!(convert("   \n\t").unwrap(), None);
    }

    #[test]
    fn single_element_is_not_wrapped() {
        let nodes = vec![MarkupNode::element("div", vec![], vec![])];
        let statement = wrap_with_fragment(&nodes).unwrap();

        assert!(matches!(
            statement,
            Statement::Expression(Expression::Element(JsxElement { self_closing: true, .. }))
        ));
    }

    #[test]
    fn several_nodes_are_wrapped() {
        let nodes = vec![
            MarkupNode::element("a", vec![], vec![]),
            MarkupNode::text(" "),
            MarkupNode::comment("c"),
        ];
        let Statement::Expression(Expression::Fragment(fragment)) =
            wrap_with_fragment(&nodes).unwrap()
        else {
            panic!("expected a fragment");
        };

        assert_eq!(fragment.children.len(), 3);
    }

    #[test]
    fn empty_node_list_is_an_empty_fragment() {
        assert_eq!(generate(&wrap_with_fragment(&[]).unwrap()), "<></>;");
    }

    #[test]
    fn root_comment_becomes_block() {
        assert_eq!(
            to_statement(&MarkupNode::comment(" c ")).unwrap(),
            Statement::Block {
                inner_comment: Some(" c ".to_string())
            }
        );
    }

    #[test]
    fn root_text_is_not_entity_encoded() {
        assert_eq!(
            to_statement(&MarkupNode::text("a < b")).unwrap(),
            Statement::Expression(Expression::String("a < b".to_string()))
        );
    }

    #[test]
    fn child_text_is_encoded() {
        assert_eq!(
            to_children(&MarkupNode::text("a < {b}")).unwrap(),
            vec![JsxChild::Text(r#"a &lt; {"{"}b{"}"}"#.to_string())]
        );
    }

    #[test]
    fn rejects_unsupported_nodes() {
        let doctype = MarkupNode::Doctype {
            name: "html".to_string(),
        };
        assert_eq!(
            to_statement(&doctype),
            Err(ConvertError::UnsupportedNodeKind("directive".to_string()))
        );

        let nested = MarkupNode::element("div", vec![], vec![doctype]);
        assert!(matches!(
            wrap_with_fragment(&[nested]),
            Err(ConvertError::UnsupportedNodeKind(_))
        ));
    }

    #[test]
    fn pre_keeps_attributes_before_raw_html() {
        let pre = MarkupNode::element(
            "pre",
            vec![("class".to_string(), AttributeValue::from("code"))],
            vec![MarkupNode::text("x")],
        );
        let Statement::Expression(Expression::Element(element)) = to_statement(&pre).unwrap() else {
            panic!("expected an element");
        };

        assert!(element.self_closing);
        assert!(element.children.is_empty());
        let names: Vec<&str> = element.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["className", RAW_HTML_ATTRIBUTE]);
    }

    #[test]
    fn drops_empty_text_children() {
        let div = MarkupNode::element("div", vec![], vec![MarkupNode::text("")]);
        let Statement::Expression(Expression::Element(element)) = to_statement(&div).unwrap() else {
            panic!("expected an element");
        };

        assert!(!element.self_closing);
        assert!(element.children.is_empty());
    }
}
