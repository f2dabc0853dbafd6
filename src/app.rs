use std::collections::HashMap;

use chrono::Utc;
use eframe::egui;

use crate::bubble::Contact;
use crate::config::{load_settings, BubbleStyles, Settings};
use crate::message::{Message, StoredMessage};
use crate::ui::menu::MenuAction;
use crate::ui::{
    render_composer, render_menu, render_thread, ComposerState, PhoneTheme, SelectedMessage,
    ThreadContext, ThreadEntry,
};

pub struct PhoneChatApp {
    pub settings: Settings,
    pub styles: BubbleStyles,
    pub theme: PhoneTheme,
    pub contacts: HashMap<String, Contact>,
    pub thread: Vec<ThreadEntry>,
    pub composer: ComposerState,
    pub selected: Option<SelectedMessage>,
    next_id: u64,
}

impl PhoneChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();
        let dark = settings.is_dark();
        cc.egui_ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut app = Self::with_settings(settings);
        let demo = demo_thread(&app.settings.local_identity);
        app.ingest_all(demo);
        app
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            styles: settings.bubble_styles(),
            theme: PhoneTheme::for_settings(settings.is_dark()),
            settings,
            contacts: HashMap::new(),
            thread: Vec::new(),
            composer: ComposerState::default(),
            selected: None,
            next_id: 1,
        }
    }

    /// Parse embeds once as messages enter the thread.
    pub fn ingest(&mut self, stored: StoredMessage) {
        let id = stored.id;
        let author = stored.author.clone();
        self.next_id = self.next_id.max(id + 1);
        match Message::ingest(stored) {
            Ok(message) => self.thread.push(ThreadEntry::Message(message)),
            Err(e) => {
                tracing::warn!(id, author = %author, error = %e, "message rejected at ingestion");
                self.thread.push(ThreadEntry::Unsupported {
                    id,
                    author,
                    reason: e.to_string(),
                });
            }
        }
    }

    pub fn ingest_all(&mut self, messages: impl IntoIterator<Item = StoredMessage>) {
        for stored in messages {
            self.ingest(stored);
        }
    }

    /// Append an outgoing text message from this device.
    pub fn send(&mut self, text: String) {
        let stored = StoredMessage {
            id: self.next_id,
            author: self.settings.local_identity.clone(),
            message: text,
            created_at: Utc::now().timestamp(),
            ..Default::default()
        };
        tracing::debug!(id = stored.id, "sending message");
        self.ingest(stored);
    }

    pub fn delete(&mut self, id: u64) {
        self.thread.retain(|entry| match entry {
            ThreadEntry::Message(m) => m.id != id,
            ThreadEntry::Unsupported { id: other, .. } => *other != id,
        });
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        match action {
            MenuAction::Copy => ctx.copy_text(selected.text),
            MenuAction::OpenImage => ctx.open_url(egui::OpenUrl::new_tab(selected.text)),
            MenuAction::Delete => self.delete(selected.id),
            MenuAction::Close => {}
        }
    }
}

impl eframe::App for PhoneChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Messages");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.settings.local_identity)
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
        });

        let mut sent = None;
        egui::TopBottomPanel::bottom("composer")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[2])
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                sent = render_composer(ui, &mut self.composer, &self.theme);
            });
        if let Some(text) = sent {
            self.send(text);
        }

        let mut selected = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(8, 0)),
            )
            .show(ctx, |ui| {
                let cx = ThreadContext {
                    local_identity: &self.settings.local_identity,
                    contacts: &self.contacts,
                    styles: &self.styles,
                    theme: &self.theme,
                    now: Utc::now(),
                };
                if let Some(request) = render_thread(ui, &self.thread, &cx) {
                    let local = &self.settings.local_identity;
                    selected = Some(SelectedMessage::from_request(&request, local));
                }
            });
        if selected.is_some() {
            self.selected = selected;
        }

        if let Some(current) = &self.selected {
            if let Some(action) = render_menu(ctx, current) {
                self.handle_menu_action(ctx, action);
            }
        }

        // Relative timestamps age while the window is idle
        ctx.request_repaint_after(std::time::Duration::from_secs(30));
    }
}

/// Sample conversation shown on first start.
fn demo_thread(me: &str) -> Vec<StoredMessage> {
    let now = Utc::now().timestamp();
    let them = "555-0142";
    let row = |id: u64, author: &str, message: &str, ago: i64| StoredMessage {
        id,
        conversation_id: format!("{}+{}", me, them),
        author: author.to_string(),
        message: message.to_string(),
        created_at: now - ago,
        ..Default::default()
    };

    vec![
        StoredMessage {
            is_system: true,
            ..row(1, them, "Conversation started", 7200)
        },
        row(2, them, "Wow", 3600),
        row(3, me, "I killed Taso :)", 3000),
        row(4, them, "https://i.imgur.com/dog.png", 1800),
        StoredMessage {
            is_embed: true,
            embed: Some(
                r#"{"type":"audio","url":"https://cdn.example.com/voice/42.ogg"}"#.to_string(),
            ),
            ..row(5, them, "", 900)
        },
        StoredMessage {
            is_embed: true,
            embed: Some(r#"{"type":"contact","name":"Taso","number":"555-0199"}"#.to_string()),
            ..row(6, me, "Taso", 600)
        },
        StoredMessage {
            is_embed: true,
            embed: Some("{broken".to_string()),
            ..row(7, them, "", 300)
        },
    ]
}
