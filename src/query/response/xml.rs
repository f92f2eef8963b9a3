//! Minimal XML element tree for Query-protocol responses.
//!
//! SES response documents are small and deeply nested, so they are read
//! into an owned tree once and pattern-matched from there, rather than
//! threading per-shape state through a streaming event loop. Attributes
//! and namespaces are irrelevant to the wire contract and are dropped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{SesError, SesResult};

/// One XML element: name, accumulated text, and child elements in
/// document order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's own text content, trimmed by the reader.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Walk a chain of first-matching children.
    pub fn descendant(&self, path: &[&str]) -> Option<&Element> {
        let mut current = self;
        for name in path {
            current = current.child(name)?;
        }
        Some(current)
    }

    /// Text of the first child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }
}

/// Parse an XML document into its root element.
pub(crate) fn parse_document(xml: &str) -> SesResult<Element> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(Element {
                    name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    ..Default::default()
                });
            }
            Ok(Event::Empty(e)) => {
                let element = Element {
                    name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    ..Default::default()
                };
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|err| SesError::MalformedResponse {
                    message: err.to_string(),
                })?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| SesError::MalformedResponse {
                    message: "unexpected closing tag".to_string(),
                })?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(SesError::MalformedResponse {
                    message: e.to_string(),
                });
            }
        }
    }

    if !stack.is_empty() {
        return Err(SesError::MalformedResponse {
            message: "unclosed element".to_string(),
        });
    }
    root.ok_or_else(|| SesError::MalformedResponse {
        message: "empty document".to_string(),
    })
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}
