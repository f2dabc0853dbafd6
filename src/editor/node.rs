//! Node kinds and per-kind dispatch.

use super::dom::DomElement;
use super::key::{KeyGen, NodeKey};
use super::text::TextNode;
use super::token::TokenUnit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Token,
}

impl NodeKind {
    /// Name the host registers the kind under.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Token => "emoji",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorNode {
    Text(TextNode),
    Token(TokenUnit),
}

impl EditorNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Token(_) => NodeKind::Token,
        }
    }

    pub fn key(&self) -> NodeKey {
        match self {
            Self::Text(node) => node.key(),
            Self::Token(unit) => unit.key(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Text(node) => node.text(),
            Self::Token(unit) => unit.text(),
        }
    }

    pub fn create_dom(&self) -> DomElement {
        match self {
            Self::Text(node) => node.create_dom(),
            Self::Token(unit) => unit.render(),
        }
    }

    /// Returns `true` when `dom` must be replaced by a fresh render.
    pub fn update_dom(&self, prev: &EditorNode, dom: &mut DomElement) -> bool {
        match (self, prev) {
            (Self::Text(node), Self::Text(prev)) => node.update_dom(prev, dom),
            (Self::Token(unit), Self::Token(prev)) => unit.update_dom(prev, dom),
            // Kind changed under the same key
            _ => true,
        }
    }

    /// Same logical node, same key.
    pub fn clone_node(&self) -> Self {
        match self {
            Self::Text(node) => Self::Text(node.clone()),
            Self::Token(unit) => Self::Token(unit.clone_node()),
        }
    }

    /// Independent node with a fresh key.
    pub fn copy(&self, keys: &mut KeyGen) -> Self {
        match self {
            Self::Text(node) => Self::Text(node.copy(keys)),
            Self::Token(unit) => Self::Token(unit.copy(keys)),
        }
    }
}

impl From<TextNode> for EditorNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<TokenUnit> for EditorNode {
    fn from(unit: TokenUnit) -> Self {
        Self::Token(unit)
    }
}

/// Whether editing operations must treat `node` as indivisible.
pub fn is_token_unit(node: &EditorNode) -> bool {
    node.kind() == NodeKind::Token
}
