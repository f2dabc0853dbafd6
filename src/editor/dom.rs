//! Rendered element tree.
//!
//! Nodes build these on mount and patch them in place on reconciliation. The
//! host owns every tree; nodes only touch the element they are handed.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomNode {
    Element(DomElement),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement {
    pub tag: String,
    pub class: Option<String>,
    pub children: Vec<DomNode>,
}

impl DomElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(DomNode::Element(child));
        self
    }

    /// Element holding `text`; empty text leaves it without children.
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(DomNode::Text(text.to_string()));
        }
    }

    pub fn first_element(&self) -> Option<&DomElement> {
        self.children.iter().find_map(|child| match child {
            DomNode::Element(el) => Some(el),
            DomNode::Text(_) => None,
        })
    }

    pub fn first_element_mut(&mut self) -> Option<&mut DomElement> {
        self.children.iter_mut().find_map(|child| match child {
            DomNode::Element(el) => Some(el),
            DomNode::Text(_) => None,
        })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    /// Concatenated text of the whole subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                DomNode::Element(el) => el.collect_text(out),
                DomNode::Text(text) => out.push_str(text),
            }
        }
    }

    /// Serialize as HTML, escaping text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = &self.class {
            out.push_str(" class=\"");
            push_escaped(out, class);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                DomNode::Element(el) => el.write_html(out),
                DomNode::Text(text) => push_escaped(out, text),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
