//! Minimal node tree used as the output of every section populator.
//! Nodes serialize to HTML; raw fragments (region presets, inline SVG icons)
//! are carried through untouched.

use std::fmt::Write as _;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "hr", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered HTML, emitted verbatim.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value for the same name.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    /// Boolean-style attribute (`data-spotlight=""`).
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, "")
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants. Raw fragments
    /// contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Raw(_) => {}
            Node::Element(el) => {
                for c in &el.children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// Depth-first list of every element matching `pred`, this node included.
    pub fn find_all<'a, F>(&'a self, pred: &F) -> Vec<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a, F>(&'a self, pred: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if let Node::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
            for c in &el.children {
                c.walk(pred, found);
            }
        }
    }

    /// True when the subtree holds a `tag` element, including inside raw
    /// fragments (case-insensitive scan of the markup).
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            Node::Text(_) => false,
            Node::Raw(html) => {
                let needle = format!("<{}", tag.to_ascii_lowercase());
                let lower = html.to_ascii_lowercase();
                let found = lower.match_indices(&needle).any(|(i, _)| {
                    html[i + needle.len()..]
                        .chars()
                        .next()
                        .map(|c| c.is_whitespace() || c == '>' || c == '/')
                        .unwrap_or(false)
                });
                found
            }
            Node::Element(el) => {
                el.tag.eq_ignore_ascii_case(tag) || el.children.iter().any(|c| c.contains_tag(tag))
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&html_escape(t)),
            Node::Raw(html) => out.push_str(html),
            Node::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                for (name, value) in &el.attrs {
                    if value.is_empty() {
                        let _ = write!(out, " {}", name);
                    } else {
                        let _ = write!(out, " {}=\"{}\"", name, html_escape(value));
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }
                for c in &el.children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Serialize a run of sibling nodes.
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for n in nodes {
        n.write_html(&mut out);
    }
    out
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
