//! Phone color themes and small drawing helpers.
//!
//! Bubble colors come from [`crate::config::BubbleStyles`]; this module only
//! covers the chrome around the thread (backgrounds, muted text, avatars).

use eframe::egui::{self, Color32};

use crate::config::Rgb;

#[derive(Clone, Debug)]
pub struct PhoneTheme {
    pub name: String,
    /// App background, thread background, composer background.
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub author: Color32,
}

impl PhoneTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),
                Color32::from_rgb(19, 19, 26),
                Color32::from_rgb(28, 28, 38),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            author: Color32::from_rgb(221, 221, 221),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
            author: Color32::from_rgb(60, 60, 60),
        }
    }

    pub fn for_settings(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

const AVATAR_COLORS: [Color32; 8] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
];

/// Stable color per sender (FNV-1a over the name).
pub fn avatar_color(name: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    AVATAR_COLORS[(hash as usize) % AVATAR_COLORS.len()]
}

/// Circle with the sender's initial.
pub fn render_avatar(ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();

    painter.circle_filled(rect.center(), size / 2.0, avatar_color(name));

    let initial: String = name
        .chars()
        .find(|c| c.is_alphanumeric())
        .unwrap_or('?')
        .to_uppercase()
        .collect();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::new(size * 0.45, egui::FontFamily::Proportional),
        Color32::WHITE,
    );

    response
}
