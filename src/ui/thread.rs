//! Conversation thread: one bubble per message.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use eframe::egui::{self, Color32};

use crate::bubble::{layout, Alignment, BubbleLayout, Contact, MenuRequest};
use crate::classify::{classify, RenderDecision};
use crate::config::BubbleStyles;
use crate::message::Message;
use crate::ui::theme::{self, PhoneTheme};

/// A thread row: either a renderable message or one rejected at ingestion.
#[derive(Clone, Debug)]
pub enum ThreadEntry {
    Message(Message),
    Unsupported {
        id: u64,
        author: String,
        reason: String,
    },
}

pub struct ThreadContext<'a> {
    pub local_identity: &'a str,
    pub contacts: &'a HashMap<String, Contact>,
    pub styles: &'a BubbleStyles,
    pub theme: &'a PhoneTheme,
    pub now: DateTime<Utc>,
}

/// Render the whole thread. Returns the menu request of a pressed action control.
pub fn render_thread<'m>(
    ui: &mut egui::Ui,
    entries: &'m [ThreadEntry],
    cx: &ThreadContext<'_>,
) -> Option<MenuRequest<'m>> {
    let mut request = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for entry in entries {
                match entry {
                    ThreadEntry::Message(message) => {
                        if let Some(req) = render_message(ui, message, cx) {
                            request = Some(req);
                        }
                    }
                    ThreadEntry::Unsupported { id, author, reason } => {
                        render_unsupported(ui, *id, author, reason, cx.theme);
                    }
                }
                ui.add_space(6.0);
            }
            ui.add_space(8.0);
        });

    request
}

fn render_message<'m>(
    ui: &mut egui::Ui,
    message: &'m Message,
    cx: &ThreadContext<'_>,
) -> Option<MenuRequest<'m>> {
    let decision = classify(message, cx.local_identity);
    let bubble = layout(message, &decision, cx.contacts, cx.now);
    let style = cx.styles.get(bubble.style);
    let full_width = ui.available_width();

    let egui_layout = match bubble.alignment {
        Alignment::Start => egui::Layout::left_to_right(egui::Align::TOP),
        Alignment::Center => egui::Layout::top_down(egui::Align::Center),
        Alignment::End => egui::Layout::right_to_left(egui::Align::TOP),
    };

    let mut pressed = false;
    ui.with_layout(egui_layout, |ui| {
        if bubble.show_avatar {
            let name = bubble.author_label.as_deref().unwrap_or(&message.author);
            theme::render_avatar(ui, name, 32.0)
                .on_hover_text(bubble.avatar.as_deref().unwrap_or(name));
            ui.add_space(6.0);
        }

        egui::Frame::new()
            .fill(theme::color(style.background))
            .corner_radius(egui::CornerRadius::same(style.corner_radius))
            .inner_margin(egui::Margin::symmetric(style.padding[0], style.padding[1]))
            .show(ui, |ui| {
                ui.set_min_width(full_width * style.min_width_pct);
                ui.set_max_width(full_width * style.max_width_pct);
                ui.vertical(|ui| {
                    let text_color = theme::color(style.text);
                    ui.horizontal_wrapped(|ui| {
                        render_body(ui, &decision, text_color, cx.theme);
                        if bubble.secondary_action && ui.small_button("⋮").clicked() {
                            pressed = true;
                        }
                    });
                    render_footer(ui, &bubble, cx.theme);
                });
            });
    });

    pressed.then(|| MenuRequest::new(message, &decision))
}

fn render_body(
    ui: &mut egui::Ui,
    decision: &RenderDecision<'_>,
    text_color: Color32,
    theme: &PhoneTheme,
) {
    match decision {
        RenderDecision::System { message, .. } => {
            ui.label(egui::RichText::new(&message.message).size(12.0).color(text_color).italics());
        }
        RenderDecision::AudioEmbed { embed, caption, .. } => {
            ui.label(egui::RichText::new("▶ Voice message").size(14.0).color(text_color).strong());
            if let Some(url) = embed.field("url") {
                ui.hyperlink_to(egui::RichText::new("listen").size(12.0).color(theme.accent), url);
            }
            if !caption.is_empty() {
                ui.label(egui::RichText::new(*caption).size(13.0).color(text_color));
            }
        }
        RenderDecision::OtherEmbed { kind, text, .. } => {
            ui.label(egui::RichText::new(format!("[{}]", kind)).size(12.0).color(theme.text_muted));
            ui.label(egui::RichText::new(*text).size(14.0).color(text_color));
        }
        RenderDecision::Image { url, .. } => {
            ui.hyperlink_to(egui::RichText::new("🖼 picture").size(14.0).color(theme.accent), *url)
                .on_hover_text(*url);
        }
        RenderDecision::PlainText { text, .. } => {
            ui.label(egui::RichText::new(*text).size(14.0).color(text_color));
        }
    }
}

fn render_footer(ui: &mut egui::Ui, bubble: &BubbleLayout, theme: &PhoneTheme) {
    if let Some(author) = &bubble.author_label {
        ui.label(egui::RichText::new(author).size(14.0).strong().color(theme.author));
    }
    ui.label(egui::RichText::new(&bubble.timestamp).size(12.0).color(theme.text_muted));
}

fn render_unsupported(ui: &mut egui::Ui, id: u64, author: &str, reason: &str, theme: &PhoneTheme) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Unsupported message from {}", author))
                .size(12.0)
                .color(theme.error)
                .italics(),
        )
        .on_hover_text(format!("#{}: {}", id, reason));
    });
}
