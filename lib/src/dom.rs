//! Owned markup tree used by the Netscape importer.
//!
//! The importer walks this tree instead of a parser-specific DOM, so tests can
//! build trees by hand and the HTML parser stays an implementation detail of
//! [`Element::parse_document`].

use scraper::{ElementRef, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-case tag name
    pub name: String,
    /// Attributes in source order, keys lower-cased
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    /// Parse an HTML document into an owned tree rooted at `<html>`.
    ///
    /// Uses an HTML5 tree builder, so the implied end tags Netscape exports
    /// depend on (`<DT>`, `<DD>` and `<p>` are never closed) nest the way a
    /// browser would nest them. Never fails; garbage in yields a sparse tree.
    pub fn parse_document(html: &str) -> Self {
        let document = Html::parse_document(html);
        convert(document.root_element())
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Attribute value by case-insensitive name
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child element with the given tag name
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is(name))
    }

    /// First descendant with the given tag name, depth-first in document order
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.is(name) {
                return Some(child);
            }
            if let Some(found) = child.find_first(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag name, in document order
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.is(name) {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.push_text(&mut text);
        text
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.push_text(out),
            }
        }
    }
}

fn convert(element: ElementRef<'_>) -> Element {
    let value = element.value();
    let mut out = Element::new(value.name());
    out.attrs = value
        .attrs()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
        .collect();

    for child in element.children() {
        match child.value() {
            scraper::Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    out.children.push(Node::Element(convert(child_element)));
                }
            }
            scraper::Node::Text(text) => out.children.push(Node::Text(String::from(&**text))),
            // Comments, doctypes and processing instructions carry no bookmarks
            _ => {}
        }
    }

    out
}
