//! Ordered composer content.

use super::dom::DomElement;
use super::emoji;
use super::key::{KeyGen, NodeKey};
use super::node::{is_token_unit, EditorNode};

#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: Vec<EditorNode>,
    keys: KeyGen,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[EditorNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys_mut(&mut self) -> &mut KeyGen {
        &mut self.keys
    }

    /// Append typed or pasted text, converting shortcodes to tokens.
    pub fn insert_text(&mut self, text: &str) {
        let nodes = emoji::tokenize(text, &mut self.keys);
        self.nodes.extend(nodes);
    }

    pub fn push(&mut self, node: EditorNode) {
        self.nodes.push(node);
    }

    /// Detach a node. Token units end in their removed state.
    pub fn remove(&mut self, key: NodeKey) -> Option<EditorNode> {
        let index = self.node_index(key)?;
        let mut node = self.nodes.remove(index);
        if let EditorNode::Token(unit) = &mut node {
            unit.remove();
        }
        Some(node)
    }

    /// Detach every node. Token units end in their removed state.
    pub fn clear(&mut self) -> Vec<EditorNode> {
        let mut detached: Vec<EditorNode> = self.nodes.drain(..).collect();
        for node in &mut detached {
            if let EditorNode::Token(unit) = node {
                unit.remove();
            }
        }
        detached
    }

    /// Replace the whole content with `text`, keeping the keys of nodes that
    /// survive the edit.
    ///
    /// Nodes are matched from the front and then from the back. A text node
    /// keeps its key when a text node sits at the same spot (its characters
    /// are patched); a token keeps its key only if glyph and class are equal.
    /// Unmatched old tokens end in their removed state.
    pub fn replace_text(&mut self, text: &str) {
        let mut fresh = emoji::tokenize(text, &mut self.keys);
        let mut old: Vec<Option<EditorNode>> = self.nodes.drain(..).map(Some).collect();

        let mut prefix = 0;
        while prefix < fresh.len() && prefix < old.len() {
            if !reuse(&mut old[prefix], &mut fresh[prefix]) {
                break;
            }
            prefix += 1;
        }

        let (mut i, mut j) = (old.len(), fresh.len());
        while i > prefix && j > prefix {
            if !reuse(&mut old[i - 1], &mut fresh[j - 1]) {
                break;
            }
            i -= 1;
            j -= 1;
        }

        for mut node in old.into_iter().flatten() {
            if let EditorNode::Token(unit) = &mut node {
                unit.remove();
            }
        }
        self.nodes = fresh;
    }

    pub fn node_index(&self, key: NodeKey) -> Option<usize> {
        self.nodes.iter().position(|n| n.key() == key)
    }

    /// Message text as it will be sent.
    pub fn text_content(&self) -> String {
        self.nodes.iter().map(EditorNode::text).collect()
    }

    /// Render every node and mark tokens mounted.
    pub fn mount(&mut self) -> Vec<DomElement> {
        self.nodes
            .iter_mut()
            .map(|node| match node {
                EditorNode::Token(unit) => unit.mount(),
                EditorNode::Text(text) => text.create_dom(),
            })
            .collect()
    }

    /// State to diff the next pass against. Keys are preserved.
    pub fn snapshot(&self) -> Vec<EditorNode> {
        self.nodes.iter().map(EditorNode::clone_node).collect()
    }

    /// Independent document with fresh keys.
    pub fn copy(&mut self) -> Document {
        let nodes = self
            .nodes
            .iter()
            .map(|node| node.copy(&mut self.keys))
            .collect();
        Document {
            nodes,
            keys: self.keys.clone(),
        }
    }

    /// Patch `dom` (one element per node of `previous`) to match the current
    /// nodes. Elements follow their node's key; nodes with a new key, or whose
    /// element cannot be patched, are rendered from scratch. Returns the keys
    /// that needed a full rerender.
    pub fn reconcile(
        &mut self,
        previous: &[EditorNode],
        dom: &mut Vec<DomElement>,
    ) -> Vec<NodeKey> {
        let mut live: Vec<Option<DomElement>> = dom.drain(..).map(Some).collect();
        let mut rerendered = Vec::new();

        for node in self.nodes.iter_mut() {
            let patched = previous
                .iter()
                .position(|p| p.key() == node.key())
                .and_then(|i| live.get_mut(i).and_then(Option::take).map(|el| (i, el)))
                .and_then(|(i, mut el)| (!node.update_dom(&previous[i], &mut el)).then_some(el));

            let el = match patched {
                Some(el) => el,
                None => {
                    rerendered.push(node.key());
                    match node {
                        EditorNode::Token(unit) => unit.mount(),
                        EditorNode::Text(text) => text.create_dom(),
                    }
                }
            };
            dom.push(el);
        }

        rerendered
    }

    /// Clamp a caret offset inside node `index`. Offsets inside a token unit
    /// snap to its nearest edge.
    pub fn snap_offset(&self, index: usize, offset: usize) -> usize {
        let Some(node) = self.nodes.get(index) else {
            return 0;
        };
        let len = node.text().chars().count();
        let offset = offset.min(len);
        if !is_token_unit(node) {
            return offset;
        }
        if offset < len - offset {
            0
        } else {
            len
        }
    }
}

/// Give `fresh` the identity of `old` when both are the same logical node.
/// Consumes `old` on success.
fn reuse(old: &mut Option<EditorNode>, fresh: &mut EditorNode) -> bool {
    let same = match (old.as_ref(), &*fresh) {
        (Some(EditorNode::Text(_)), EditorNode::Text(_)) => true,
        (Some(EditorNode::Token(a)), EditorNode::Token(b)) => {
            a.text() == b.text() && a.style_class() == b.style_class()
        }
        _ => false,
    };
    if !same {
        return false;
    }
    let Some(mut kept) = old.take() else {
        return false;
    };
    if let EditorNode::Text(text) = &mut kept {
        text.set_text(fresh.text());
    }
    *fresh = kept;
    true
}
