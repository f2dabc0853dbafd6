//! Picks the render path for a single message.
//!
//! # Rule Priority (first match wins)
//!
//! 1. System message → [`RenderDecision::System`]
//! 2. Audio embed → [`RenderDecision::AudioEmbed`]
//! 3. Any other embed → [`RenderDecision::OtherEmbed`]
//! 4. Text matching the image-URL test → [`RenderDecision::Image`]
//! 5. Everything else → [`RenderDecision::PlainText`]
//!
//! The local identity is only used for the ownership comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::{Embed, Message, MessageContent};

// Loose on purpose: any `.png`-like run after an http(s) prefix matches,
// even when it is not the real suffix.
static IMAGE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)https?://.*\.(?:jpg|jpeg|png|gif)").expect("image URL regex pattern is valid")
});

/// True when `text` looks like a link to a picture.
pub fn is_image_url(text: &str) -> bool {
    IMAGE_URL_RE.is_match(text)
}

/// Which presentation branch handles the message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RenderVariant {
    System,
    AudioEmbed,
    OtherEmbed,
    Image,
    PlainText,
}

impl RenderVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::AudioEmbed => "audio_embed",
            Self::OtherEmbed => "other_embed",
            Self::Image => "image",
            Self::PlainText => "plain_text",
        }
    }
}

/// Classifier output: the chosen variant plus the data its renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision<'a> {
    System {
        message: &'a Message,
        local_identity: &'a str,
    },
    AudioEmbed {
        embed: &'a Embed,
        is_mine: bool,
        caption: &'a str,
    },
    OtherEmbed {
        embed: &'a Embed,
        kind: &'a str,
        is_mine: bool,
        text: &'a str,
    },
    Image {
        url: &'a str,
        is_mine: bool,
    },
    PlainText {
        text: &'a str,
        is_mine: bool,
    },
}

/// Classify `message` as seen by `local_identity`.
pub fn classify<'a>(message: &'a Message, local_identity: &'a str) -> RenderDecision<'a> {
    let is_mine = message.is_mine(local_identity);

    match &message.content {
        MessageContent::System => RenderDecision::System {
            message,
            local_identity,
        },
        MessageContent::Embed(embed) if embed.is_audio() => RenderDecision::AudioEmbed {
            embed,
            is_mine,
            caption: &message.message,
        },
        MessageContent::Embed(embed) => RenderDecision::OtherEmbed {
            embed,
            kind: &embed.kind,
            is_mine,
            text: &message.message,
        },
        MessageContent::Text if is_image_url(&message.message) => RenderDecision::Image {
            url: &message.message,
            is_mine,
        },
        MessageContent::Text => RenderDecision::PlainText {
            text: &message.message,
            is_mine,
        },
    }
}

impl<'a> RenderDecision<'a> {
    pub fn variant(&self) -> RenderVariant {
        match self {
            Self::System { .. } => RenderVariant::System,
            Self::AudioEmbed { .. } => RenderVariant::AudioEmbed,
            Self::OtherEmbed { .. } => RenderVariant::OtherEmbed,
            Self::Image { .. } => RenderVariant::Image,
            Self::PlainText { .. } => RenderVariant::PlainText,
        }
    }

    pub fn is_mine(&self) -> bool {
        match self {
            Self::System {
                message,
                local_identity,
            } => message.is_mine(local_identity),
            Self::AudioEmbed { is_mine, .. }
            | Self::OtherEmbed { is_mine, .. }
            | Self::Image { is_mine, .. }
            | Self::PlainText { is_mine, .. } => *is_mine,
        }
    }

    /// Whether the bubble exposes its contextual action control.
    pub fn show_secondary_action(&self) -> bool {
        show_secondary_action(self, self.is_mine())
    }
}

/// Own messages and pictures get the action control.
pub fn show_secondary_action(decision: &RenderDecision<'_>, is_mine: bool) -> bool {
    is_mine || matches!(decision, RenderDecision::Image { .. })
}
