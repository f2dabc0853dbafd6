//! Plain text node, the base every text-like node builds on.

use super::dom::DomElement;
use super::key::{KeyGen, NodeKey};

/// Inline formatting that decides the rendered tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
}

impl TextFormat {
    pub fn tag(self) -> &'static str {
        match (self.bold, self.italic) {
            (true, _) => "strong",
            (false, true) => "em",
            (false, false) => "span",
        }
    }
}

/// How editing operations treat the node's characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextMode {
    #[default]
    Normal,
    /// Never split, merged or partially selected.
    Token,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    key: NodeKey,
    text: String,
    format: TextFormat,
    mode: TextMode,
}

impl TextNode {
    pub fn new(text: impl Into<String>, keys: &mut KeyGen) -> Self {
        Self::with_key(text, keys.mint())
    }

    pub fn with_key(text: impl Into<String>, key: NodeKey) -> Self {
        Self {
            key,
            text: text.into(),
            format: TextFormat::default(),
            mode: TextMode::Normal,
        }
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    pub fn mode(&self) -> TextMode {
        self.mode
    }

    /// Same content under a freshly minted key.
    pub fn copy(&self, keys: &mut KeyGen) -> Self {
        Self {
            key: keys.mint(),
            ..self.clone()
        }
    }

    pub fn create_dom(&self) -> DomElement {
        DomElement::new(self.format.tag()).with_text(&self.text)
    }

    /// Patch `dom` from `prev` to `self`. Returns `true` when the element
    /// itself has to be replaced.
    pub fn update_dom(&self, prev: &TextNode, dom: &mut DomElement) -> bool {
        if prev.format.tag() != self.format.tag() {
            return true;
        }
        if dom.text_content() != self.text {
            dom.set_text(&self.text);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dom_tag_follows_format() {
        let mut keys = KeyGen::new();
        let plain = TextNode::new("hi", &mut keys);
        assert_eq!(plain.create_dom().to_html(), "<span>hi</span>");

        let bold = plain.clone().with_format(TextFormat { bold: true, italic: false });
        assert_eq!(bold.create_dom().tag, "strong");
        let italic = plain.with_format(TextFormat { bold: false, italic: true });
        assert_eq!(italic.create_dom().tag, "em");
    }

    #[test]
    fn test_update_dom_patches_text() {
        let mut keys = KeyGen::new();
        let prev = TextNode::new("hello", &mut keys);
        let mut dom = prev.create_dom();

        let mut next = prev.clone();
        next.set_text("hello world");
        assert!(!next.update_dom(&prev, &mut dom));
        assert_eq!(dom.text_content(), "hello world");
    }

    #[test]
    fn test_update_dom_tag_change_needs_replace() {
        let mut keys = KeyGen::new();
        let prev = TextNode::new("hello", &mut keys);
        let mut dom = prev.create_dom();
        let next = prev.clone().with_format(TextFormat { bold: true, italic: false });
        assert!(next.update_dom(&prev, &mut dom));
    }

    #[test]
    fn test_copy_mints_key() {
        let mut keys = KeyGen::new();
        let node = TextNode::new("a", &mut keys);
        let copy = node.copy(&mut keys);
        assert_ne!(copy.key(), node.key());
        assert_eq!(copy.text(), node.text());
    }

    #[test]
    fn test_mode_defaults_to_normal() {
        let mut keys = KeyGen::new();
        let node = TextNode::new("a", &mut keys);
        assert_eq!(node.mode(), TextMode::Normal);
        assert_eq!(node.with_mode(TextMode::Token).mode(), TextMode::Token);
    }
}
