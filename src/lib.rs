//! Phone Chat library.
//!
//! Message render classification, bubble layout and the composer's emoji
//! token model, plus the egui screens that draw them.

pub mod app;
pub mod bubble;
pub mod classify;
pub mod config;
pub mod editor;
pub mod error;
pub mod message;
pub mod ui;

#[cfg(test)]
mod integration_tests;

pub use classify::{classify, is_image_url, show_secondary_action, RenderDecision, RenderVariant};
pub use editor::{is_token_unit, TokenUnit};
pub use error::MessageError;
pub use message::{Embed, Message, MessageContent, StoredMessage};
