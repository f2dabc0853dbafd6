//! Bubble action menu, opened from a bubble's action control.

use eframe::egui;

use crate::bubble::MenuRequest;

/// Owned copy of a [`MenuRequest`] kept while the menu is open.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMessage {
    pub id: u64,
    pub text: String,
    pub is_image: bool,
    pub is_mine: bool,
}

impl SelectedMessage {
    pub fn from_request(request: &MenuRequest<'_>, local_identity: &str) -> Self {
        Self {
            id: request.message.id,
            text: request.message.message.clone(),
            is_image: request.is_image,
            is_mine: request.message.is_mine(local_identity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    Copy,
    OpenImage,
    Delete,
    Close,
}

/// Render the menu window. Returns the chosen action, if any.
pub fn render_menu(ctx: &egui::Context, selected: &SelectedMessage) -> Option<MenuAction> {
    let mut action = None;

    egui::Window::new("Message")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -80.0))
        .show(ctx, |ui| {
            if ui.button("Copy").clicked() {
                action = Some(MenuAction::Copy);
            }
            if selected.is_image && ui.button("Open picture").clicked() {
                action = Some(MenuAction::OpenImage);
            }
            if selected.is_mine && ui.button("Delete").clicked() {
                action = Some(MenuAction::Delete);
            }
            ui.separator();
            if ui.button("Close").clicked() {
                action = Some(MenuAction::Close);
            }
        });

    action
}
