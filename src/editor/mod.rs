//! Composer document model with inline emoji tokens.
//!
//! The host editor owns scheduling and selection. This module only supplies
//! what the host asks of each node kind: building its rendered structure,
//! patching that structure on reconciliation, and cloning.
//!
//! - [`dom`]: rendered element tree handed back and forth with the host
//! - [`key`]: node keys and the key generator
//! - [`text`]: plain text nodes
//! - [`token`]: atomic token units (emoji)
//! - [`node`]: the tagged node kind and per-kind dispatch
//! - [`emoji`]: shortcode parse step that inserts token units
//! - [`document`]: ordered composer content

pub mod document;
pub mod dom;
pub mod emoji;
pub mod key;
pub mod node;
pub mod text;
pub mod token;

pub use document::Document;
pub use dom::{DomElement, DomNode};
pub use key::{KeyGen, NodeKey};
pub use node::{is_token_unit, EditorNode, NodeKind};
pub use text::{TextFormat, TextMode, TextNode};
pub use token::{Lifecycle, TokenUnit, TOKEN_INNER_CLASS};
