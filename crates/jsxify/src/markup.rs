//! Markup parsing and re-serialization.
//!
//! Parsing runs the xml5ever tokenizer and builds an owned [`MarkupNode`]
//! tree with a plain open-element stack. Names keep their source case and
//! the tree is never repaired: no implied `tbody`, no auto-closed `<p>`, no
//! dropped `html`/`body` tags. Serialization goes through html5ever's
//! serializer over rcdom handles, which never leave this module.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use html5ever::serialize::{serialize as serialize_html, SerializeOpts, TraversalScope};
use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use xml5ever::buffer_queue::BufferQueue;
use xml5ever::tendril::StrTendril;
use xml5ever::tokenizer::{
    ProcessResult, Tag, TagKind, Token, TokenSink, XmlTokenizer, XmlTokenizerOpts,
};

use crate::error::ConvertError;

/// Elements that never have content. A start tag for one of these closes
/// immediately and a matching end tag is ignored.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
    "param", "source", "track", "wbr",
];

/// A parsed unit of the input document.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    /// An element with its attributes in source order.
    Element {
        name: String,
        attributes: Vec<(String, AttributeValue)>,
        children: Vec<MarkupNode>,
    },

    /// Raw character data.
    Text(String),

    /// Comment body, without the `<!--` and `-->` markers.
    Comment(String),

    /// A doctype declaration. The converter rejects these.
    Doctype { name: String },

    /// A processing instruction such as `<?xml version="1.0"?>`.
    ProcessingInstruction { target: String, data: String },
}

impl MarkupNode {
    /// Build an element node.
    pub fn element(
        name: impl Into<String>,
        attributes: Vec<(String, AttributeValue)>,
        children: Vec<MarkupNode>,
    ) -> Self {
        MarkupNode::Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Build a text node.
    pub fn text(text: impl Into<String>) -> Self {
        MarkupNode::Text(text.into())
    }

    /// Build a comment node.
    pub fn comment(body: impl Into<String>) -> Self {
        MarkupNode::Comment(body.into())
    }

    /// Node kind tag, as reported in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            MarkupNode::Element { .. } => "tag",
            MarkupNode::Text(_) => "text",
            MarkupNode::Comment(_) => "comment",
            MarkupNode::Doctype { .. } => "directive",
            MarkupNode::ProcessingInstruction { .. } => "processing-instruction",
        }
    }
}

/// An attribute value. Parsed markup only ever yields text; numbers come from
/// trees built by hand.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
}

impl AttributeValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, AttributeValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            AttributeValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Integral values print without a fractional part, like `String(3)`.
            AttributeValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e21 => {
                write!(f, "{}", *n as i128)
            }
            AttributeValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

/// Parse an HTML fragment into its top-level nodes.
///
/// Void elements come back without children. Unclosed elements are closed at
/// the end of input and end tags with no open counterpart are dropped.
pub fn parse(html: &str) -> Vec<MarkupNode> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = XmlTokenizer::new(MarkupSink::default(), XmlTokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.builder.take().finish()
}

/// Serialize nodes back into HTML markup.
pub fn serialize(nodes: &[MarkupNode]) -> Result<String, ConvertError> {
    let container = new_handle(NodeData::Document);
    container
        .children
        .borrow_mut()
        .extend(nodes.iter().map(to_handle));

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    let mut output = Vec::new();
    serialize_html(&mut output, &SerializableHandle::from(container), opts)
        .map_err(|e| ConvertError::Serialize(e.to_string()))?;

    String::from_utf8(output).map_err(|e| ConvertError::Serialize(e.to_string()))
}

/// Receives tokens and hands them to a [`TreeBuilder`].
#[derive(Default)]
struct MarkupSink {
    builder: RefCell<TreeBuilder>,
}

impl TokenSink for MarkupSink {
    type Handle = ();

    fn process_token(&self, token: Token) -> ProcessResult<()> {
        let mut builder = self.builder.borrow_mut();

        match token {
            Token::Tag(tag) => builder.tag(tag),
            Token::Characters(text) => builder.append(MarkupNode::Text(text.to_string())),
            Token::NullCharacter => builder.append(MarkupNode::text("\u{FFFD}")),
            Token::Comment(body) => builder.append(MarkupNode::Comment(body.to_string())),
            Token::Doctype(doctype) => builder.append(MarkupNode::Doctype {
                name: doctype.name.map(|name| name.to_string()).unwrap_or_default(),
            }),
            Token::ProcessingInstruction(pi) => {
                builder.append(MarkupNode::ProcessingInstruction {
                    target: pi.target.to_string(),
                    data: pi.data.to_string(),
                })
            }
            Token::ParseError(error) => tracing::trace!("Markup parse error: {}", error),
            Token::EndOfFile => {}
        }

        ProcessResult::Continue
    }
}

/// An element whose end tag has not been seen yet.
struct OpenElement {
    name: String,
    attributes: Vec<(String, AttributeValue)>,
    children: Vec<MarkupNode>,
}

impl OpenElement {
    fn into_node(self) -> MarkupNode {
        MarkupNode::Element {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<MarkupNode>,
    open: Vec<OpenElement>,
}

impl TreeBuilder {
    fn tag(&mut self, tag: Tag) {
        let name = qualified_name(&tag.name);

        match tag.kind {
            TagKind::StartTag | TagKind::EmptyTag => {
                let element = OpenElement {
                    name,
                    attributes: tag
                        .attrs
                        .iter()
                        .map(|attr| {
                            (
                                qualified_name(&attr.name),
                                AttributeValue::Text(attr.value.to_string()),
                            )
                        })
                        .collect(),
                    children: Vec::new(),
                };

                if tag.kind == TagKind::EmptyTag || is_void(&element.name) {
                    self.append(element.into_node());
                } else {
                    self.open.push(element);
                }
            }
            TagKind::EndTag => self.close_named(&name),
            // `</>` closes whatever is open
            TagKind::ShortTag => self.close_current(),
        }
    }

    /// Add a node to the innermost open element, merging adjacent text.
    fn append(&mut self, node: MarkupNode) {
        let siblings = match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        };

        if let (MarkupNode::Text(text), Some(MarkupNode::Text(previous))) =
            (&node, siblings.last_mut())
        {
            previous.push_str(text);
            return;
        }

        siblings.push(node);
    }

    /// Close the nearest open element with this name and everything opened
    /// inside it. An exact match wins over one that differs only in case.
    fn close_named(&mut self, name: &str) {
        let position = self
            .open
            .iter()
            .rposition(|open| open.name == name)
            .or_else(|| {
                self.open
                    .iter()
                    .rposition(|open| open.name.eq_ignore_ascii_case(name))
            });

        let Some(position) = position else {
            tracing::trace!("Ignoring unmatched end tag </{}>", name);
            return;
        };

        while self.open.len() > position {
            self.close_current();
        }
    }

    fn close_current(&mut self) {
        if let Some(element) = self.open.pop() {
            self.append(element.into_node());
        }
    }

    fn finish(mut self) -> Vec<MarkupNode> {
        while !self.open.is_empty() {
            self.close_current();
        }
        self.roots
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// Name as written in the source, including any `prefix:`.
fn qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

fn new_handle(data: NodeData) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data,
    })
}

/// Build an rcdom node (and its subtree) for serialization.
fn to_handle(node: &MarkupNode) -> Handle {
    match node {
        MarkupNode::Element {
            name,
            attributes,
            children,
        } => {
            let attrs = attributes
                .iter()
                .map(|(name, value)| Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(name.as_str())),
                    value: value.to_string().into(),
                })
                .collect();

            let handle = new_handle(NodeData::Element {
                name: QualName::new(None, ns!(html), LocalName::from(name.as_str())),
                attrs: RefCell::new(attrs),
                template_contents: Default::default(),
                mathml_annotation_xml_integration_point: false,
            });
            handle
                .children
                .borrow_mut()
                .extend(children.iter().map(to_handle));
            handle
        }
        MarkupNode::Text(text) => new_handle(NodeData::Text {
            contents: RefCell::new(text.as_str().into()),
        }),
        MarkupNode::Comment(body) => new_handle(NodeData::Comment {
            contents: body.as_str().into(),
        }),
        MarkupNode::Doctype { name } => new_handle(NodeData::Doctype {
            name: name.as_str().into(),
            public_id: "".into(),
            system_id: "".into(),
        }),
        MarkupNode::ProcessingInstruction { target, data } => {
            new_handle(NodeData::ProcessingInstruction {
                target: target.as_str().into(),
                contents: data.as_str().into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_top_level_nodes_in_order() {
        let nodes = parse("<!-- a --><p>one</p> text");

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], MarkupNode::comment(" a "));
        assert!(matches!(&nodes[1], MarkupNode::Element { name, .. } if name == "p"));
        assert_eq!(nodes[2], MarkupNode::text(" text"));
    }

    #[test]
    fn keeps_attribute_order() {
        let nodes = parse(r#"<a title="t" href="/x" data-id="1"></a>"#);

        let MarkupNode::Element { attributes, .. } = &nodes[0] else {
            panic!("expected element");
        };
        let names: Vec<&str> = attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["title", "href", "data-id"]);
    }

    #[test]
    fn void_elements_have_no_children() {
        let nodes = parse("<div>a<br>b<img src=x>c</div>");

        let MarkupNode::Element { children, .. } = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 5);
        assert!(matches!(
            &children[1],
            MarkupNode::Element { name, children, .. } if name == "br" && children.is_empty()
        ));
    }

    #[test]
    fn keeps_source_case() {
        let nodes = parse(r#"<MyWidget dataValue="1">x</MyWidget>"#);

        assert_eq!(
            nodes,
            vec![MarkupNode::element(
                "MyWidget",
                vec![("dataValue".to_string(), AttributeValue::from("1"))],
                vec![MarkupNode::text("x")],
            )]
        );
    }

    #[test]
    fn does_not_insert_implied_elements() {
        let nodes = parse("<table><tr><td>a</td></tr></table>");

        assert_eq!(
            nodes,
            vec![MarkupNode::element(
                "table",
                vec![],
                vec![MarkupNode::element(
                    "tr",
                    vec![],
                    vec![MarkupNode::element("td", vec![], vec![MarkupNode::text("a")])],
                )],
            )]
        );
    }

    #[test]
    fn nests_blocks_as_written() {
        assert_eq!(
            parse("<p><div>x</div></p>"),
            vec![MarkupNode::element(
                "p",
                vec![],
                vec![MarkupNode::element("div", vec![], vec![MarkupNode::text("x")])],
            )]
        );

        let nodes = parse("<title>t</title><body><p>x</p></body>");
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[1], MarkupNode::Element { name, .. } if name == "body"));
    }

    #[test]
    fn closes_open_elements_at_end_of_input() {
        assert_eq!(
            parse("<div><span>a"),
            vec![MarkupNode::element(
                "div",
                vec![],
                vec![MarkupNode::element("span", vec![], vec![MarkupNode::text("a")])],
            )]
        );
    }

    #[test]
    fn drops_unmatched_end_tags() {
        assert_eq!(parse("a</span>b"), vec![MarkupNode::text("ab")]);
        assert_eq!(
            parse("<b>x</B>y"),
            vec![
                MarkupNode::element("b", vec![], vec![MarkupNode::text("x")]),
                MarkupNode::text("y"),
            ]
        );
    }

    #[test]
    fn keeps_leading_newline_in_pre() {
        assert_eq!(
            parse("<pre>\nline</pre>"),
            vec![MarkupNode::element("pre", vec![], vec![MarkupNode::text("\nline")])]
        );
    }

    #[test]
    fn decodes_character_references() {
        assert_eq!(
            parse("caf&eacute; &amp; &#169; & more"),
            vec![MarkupNode::text("café & © & more")]
        );
    }

    #[test]
    fn reads_valueless_attributes() {
        let nodes = parse(r#"<input disabled class="x"/>"#);

        assert_eq!(
            nodes,
            vec![MarkupNode::element(
                "input",
                vec![
                    ("disabled".to_string(), AttributeValue::from("")),
                    ("class".to_string(), AttributeValue::from("x")),
                ],
                vec![],
            )]
        );
    }

    #[test]
    fn serializes_children_back_to_markup() {
        let nodes = parse("<pre><b>bold</b> &amp; plain</pre>");
        let MarkupNode::Element { children, .. } = &nodes[0] else {
            panic!("expected element");
        };

        assert_eq!(serialize(children).unwrap(), "<b>bold</b> &amp; plain");
    }

    #[test]
    fn serializes_void_elements_without_end_tag() {
        let nodes = vec![
            MarkupNode::text("a"),
            MarkupNode::element("br", vec![], vec![]),
            MarkupNode::element(
                "span",
                vec![("class".to_string(), AttributeValue::from("x"))],
                vec![MarkupNode::text("b")],
            ),
        ];

        assert_eq!(
            serialize(&nodes).unwrap(),
            r#"a<br><span class="x">b</span>"#
        );
    }

    #[test]
    fn formats_numeric_values() {
        assert_eq!(AttributeValue::from(3.0).to_string(), "3");
        assert_eq!(AttributeValue::from(-12i64).to_string(), "-12");
        assert_eq!(AttributeValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(AttributeValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }
}
