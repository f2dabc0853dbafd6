//! Phone Chat - messages screen of a simulated phone, built with egui.
//!
//! Messages are ingested once (embeds parsed), classified per frame into one of
//! five render variants, and drawn as bubbles. The composer turns emoji
//! shortcodes into atomic tokens as you type.

use eframe::egui;
use tracing_subscriber::EnvFilter;

use phone_chat::app::PhoneChatApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 720.0])
            .with_min_inner_size([300.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Phone - Messages",
        options,
        Box::new(|cc| Ok(Box::new(PhoneChatApp::new(cc)))),
    )
}
