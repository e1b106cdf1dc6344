//! Minimal element tree for SVG and HTML output.
//!
//! Elements keep attributes and inline style declarations in insertion
//! order, so serializing the same tree always yields the same bytes.

use std::fmt::Write as _;

const VOID_TAGS: [&str; 3] = ["br", "meta", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn style(mut self, name: &str, value: impl ToString) -> Self {
        self.set_style(name, value);
        self
    }

    pub fn set_style(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.styles.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((name.to_string(), value)),
        }
    }

    pub fn get_style(&self, name: &str) -> Option<&str> {
        self.styles.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the element with `id`, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children().find_map(|c| c.find_by_id(id))
    }

    /// All descendants carrying `class`, in document order.
    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in self.children() {
            if child.has_class(class) {
                found.push(child);
            }
            child.collect_class(class, found);
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    pub fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        if !self.styles.is_empty() {
            out.push_str(" style=\"");
            for (i, (k, v)) in self.styles.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}: {};", k, escape(v));
            }
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(&escape(t)),
                Node::Element(e) => e.write_markup(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
