//! Composer bar: text input plus a preview of the tokenized document.

use eframe::egui;

use crate::editor::{is_token_unit, Document, DomElement, EditorNode, NodeKey};
use crate::ui::theme::PhoneTheme;

/// Draft text and the document built from it.
#[derive(Default)]
pub struct ComposerState {
    pub draft: String,
    synced: String,
    document: Document,
    previous: Vec<EditorNode>,
    dom: Vec<DomElement>,
}

impl ComposerState {
    /// Bring the document in line with the draft and reconcile the preview.
    /// Returns the keys of nodes rendered from scratch.
    pub fn sync(&mut self) -> Vec<NodeKey> {
        if self.synced == self.draft {
            return Vec::new();
        }
        self.synced = self.draft.clone();
        self.previous = self.document.snapshot();
        self.document.replace_text(&self.draft);
        let rerendered = self.document.reconcile(&self.previous, &mut self.dom);
        tracing::trace!(
            nodes = self.document.nodes().len(),
            rerendered = rerendered.len(),
            "composer reconciled"
        );
        rerendered
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Text to send, with shortcodes already replaced by glyphs.
    pub fn take(&mut self) -> Option<String> {
        self.sync();
        let text = self.document.text_content();
        self.draft.clear();
        self.synced.clear();
        self.document.clear();
        self.previous.clear();
        self.dom.clear();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Input row. Returns the message text when the user sends.
pub fn render_composer(
    ui: &mut egui::Ui,
    state: &mut ComposerState,
    theme: &PhoneTheme,
) -> Option<String> {
    let mut send = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.draft)
                .hint_text("Message")
                .desired_width(ui.available_width() - 60.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
        if ui.button("Send").clicked() {
            send = true;
        }
    });

    state.sync();
    render_preview(ui, state, theme);

    if send {
        state.take()
    } else {
        None
    }
}

fn render_preview(ui: &mut egui::Ui, state: &ComposerState, theme: &PhoneTheme) {
    if state.document.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (node, dom) in state.document.nodes().iter().zip(&state.dom) {
            let rich = egui::RichText::new(node.text()).size(13.0);
            let response = if is_token_unit(node) {
                ui.label(rich.background_color(theme.surface[1]).size(16.0))
            } else {
                ui.label(rich.color(theme.text_secondary))
            };
            response.on_hover_text(dom.to_html());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_tokenizes_draft() {
        let mut state = ComposerState::default();
        state.draft = "see you <3".to_string();
        state.sync();
        assert_eq!(state.document().nodes().len(), 2);
        assert_eq!(state.dom.len(), 2);
        assert_eq!(state.dom[1].class.as_deref(), Some("emoji heart"));
    }

    #[test]
    fn test_sync_typing_rerenders_only_new_node() {
        let mut state = ComposerState::default();
        state.draft = "hi :)".to_string();
        assert_eq!(state.sync().len(), 2);
        let keys: Vec<NodeKey> = state.document().nodes().iter().map(EditorNode::key).collect();

        state.draft = "hi :) x".to_string();
        let rerendered = state.sync();
        assert_eq!(rerendered, vec![state.document().nodes()[2].key()]);
        assert_eq!(state.document().nodes()[0].key(), keys[0]);
        assert_eq!(state.document().nodes()[1].key(), keys[1]);
        assert_eq!(state.dom.len(), 3);

        // Unchanged draft is a no-op
        assert!(state.sync().is_empty());
    }

    #[test]
    fn test_take_returns_glyph_text() {
        let mut state = ComposerState::default();
        state.draft = "hi :)".to_string();
        assert_eq!(state.take().as_deref(), Some("hi 🙂"));
        assert!(state.draft.is_empty());
        assert!(state.document().is_empty());

        state.draft = "   ".to_string();
        assert_eq!(state.take(), None);
    }
}
