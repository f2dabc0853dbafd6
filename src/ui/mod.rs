//! egui rendering for the phone messages screen.
//!
//! - `thread`: conversation bubbles
//! - `composer`: input bar with emoji token preview
//! - `menu`: bubble action menu
//! - `theme`: colors and avatars

pub mod composer;
pub mod menu;
pub mod theme;
pub mod thread;

pub use composer::{render_composer, ComposerState};
pub use menu::{render_menu, SelectedMessage};
pub use theme::PhoneTheme;
pub use thread::{render_thread, ThreadContext, ThreadEntry};
