//! Atomic token unit: an inline emoji the editor treats as one character.
//!
//! Renders as two layers, an outer span carrying the token's style class and
//! an inner span marked [`TOKEN_INNER_CLASS`] that holds the text exactly as a
//! plain text node would render it. Once mounted, only the inner text is ever
//! patched.

use super::dom::DomElement;
use super::key::{KeyGen, NodeKey};
use super::text::{TextMode, TextNode};

/// Marker class on the inner layer.
pub const TOKEN_INNER_CLASS: &str = "emoji-inner";

/// Where the unit is in its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted,
    /// Terminal. The host never reconciles a removed unit.
    Removed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenUnit {
    base: TextNode,
    style_class: String,
    lifecycle: Lifecycle,
}

impl TokenUnit {
    /// New unit in token mode. The text is kept verbatim.
    pub fn create(
        text: impl Into<String>,
        style_class: impl Into<String>,
        keys: &mut KeyGen,
    ) -> Self {
        Self {
            base: TextNode::new(text, keys).with_mode(TextMode::Token),
            style_class: style_class.into(),
            lifecycle: Lifecycle::Unmounted,
        }
    }

    pub fn key(&self) -> NodeKey {
        self.base.key()
    }

    pub fn text(&self) -> &str {
        self.base.text()
    }

    pub fn style_class(&self) -> &str {
        &self.style_class
    }

    pub fn mode(&self) -> TextMode {
        self.base.mode()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Same logical node for the next reconciliation pass: key and state are kept.
    pub fn clone_node(&self) -> Self {
        self.clone()
    }

    /// Independent copy for a copied document or a parallel edit branch.
    pub fn copy(&self, keys: &mut KeyGen) -> Self {
        Self {
            base: self.base.copy(keys),
            style_class: self.style_class.clone(),
            lifecycle: Lifecycle::Unmounted,
        }
    }

    /// Build the two-layer structure.
    pub fn render(&self) -> DomElement {
        let mut inner = self.base.create_dom();
        inner.class = Some(TOKEN_INNER_CLASS.to_string());
        DomElement::new("span")
            .with_class(self.style_class.clone())
            .with_child(inner)
    }

    /// Render and enter the mounted state.
    pub fn mount(&mut self) -> DomElement {
        debug_assert_ne!(self.lifecycle, Lifecycle::Removed, "mounting a removed token");
        self.lifecycle = Lifecycle::Mounted;
        self.render()
    }

    pub fn remove(&mut self) {
        self.lifecycle = Lifecycle::Removed;
    }

    /// Patch the live structure from `prev` to `self`.
    ///
    /// Returns `true` when the inner layer is gone and the unit must be
    /// rendered from scratch. The wrapper is never rebuilt otherwise.
    pub fn update_dom(&self, prev: &TokenUnit, dom: &mut DomElement) -> bool {
        debug_assert_ne!(self.lifecycle, Lifecycle::Removed, "reconciling a removed token");
        let Some(inner) = dom.first_element_mut() else {
            return true;
        };
        // A format change only affects the inner tag, which the wrapper hides.
        let _ = self.base.update_dom(&prev.base, inner);
        false
    }
}
