//! Bubble layout derived from a [`RenderDecision`].
//!
//! The presentation layer draws whatever this module decides: which side the
//! bubble sits on, which style it uses, whether an avatar and author label are
//! shown, and the relative timestamp under the content.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::RenderDecision;
use crate::message::Message;

/// Entry in the contact directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub number: String,
    pub display: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Lookup of phone numbers to saved contacts.
pub trait ContactDirectory {
    fn lookup(&self, address: &str) -> Option<&Contact>;
}

impl ContactDirectory for HashMap<String, Contact> {
    fn lookup(&self, address: &str) -> Option<&Contact> {
        self.get(address)
    }
}

/// Horizontal placement inside the thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Key into [`crate::config::BubbleStyles`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BubbleStyleKey {
    System,
    Mine,
    Theirs,
    MyAudio,
    TheirAudio,
}

impl BubbleStyleKey {
    pub const ALL: [BubbleStyleKey; 5] = [
        Self::System,
        Self::Mine,
        Self::Theirs,
        Self::MyAudio,
        Self::TheirAudio,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleLayout {
    pub alignment: Alignment,
    pub style: BubbleStyleKey,
    pub show_avatar: bool,
    pub avatar: Option<String>,
    /// Sender name shown under messages from other people.
    pub author_label: Option<String>,
    pub timestamp: String,
    pub secondary_action: bool,
}

/// Lay out one classified message.
pub fn layout(
    message: &Message,
    decision: &RenderDecision<'_>,
    contacts: &dyn ContactDirectory,
    now: DateTime<Utc>,
) -> BubbleLayout {
    let is_mine = decision.is_mine();
    let contact = contacts.lookup(&message.author);

    let (alignment, style) = match decision {
        RenderDecision::System { .. } => (Alignment::Center, BubbleStyleKey::System),
        RenderDecision::AudioEmbed { .. } if is_mine => (Alignment::End, BubbleStyleKey::MyAudio),
        RenderDecision::AudioEmbed { .. } => (Alignment::Start, BubbleStyleKey::TheirAudio),
        _ if is_mine => (Alignment::End, BubbleStyleKey::Mine),
        _ => (Alignment::Start, BubbleStyleKey::Theirs),
    };

    let is_system = style == BubbleStyleKey::System;
    let is_audio = matches!(style, BubbleStyleKey::MyAudio | BubbleStyleKey::TheirAudio);
    let show_avatar = !is_system && !is_mine && !is_audio;

    let author_label = (!is_system && !is_mine).then(|| {
        contact
            .map(|c| c.display.clone())
            .unwrap_or_else(|| message.author.clone())
    });

    BubbleLayout {
        alignment,
        style,
        show_avatar,
        avatar: if show_avatar {
            contact.and_then(|c| c.avatar.clone())
        } else {
            None
        },
        author_label,
        timestamp: relative_time(message.created_at, now),
        // Audio bubbles open the menu from inside the player
        secondary_action: !is_system && !is_audio && decision.show_secondary_action(),
    }
}

/// What the bubble menu needs once the action control is pressed.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRequest<'a> {
    pub message: &'a Message,
    pub is_image: bool,
}

impl<'a> MenuRequest<'a> {
    pub fn new(message: &'a Message, decision: &RenderDecision<'_>) -> Self {
        Self {
            message,
            is_image: matches!(decision, RenderDecision::Image { .. }),
        }
    }
}

/// Human relative time ("5 minutes ago", "in a day").
///
/// # Thresholds
///
/// - under 45s: "a few seconds"
/// - under 90s: "a minute"
/// - under 45 minutes: "N minutes", then "an hour" until 90 minutes
/// - under 22 hours: "N hours", then "a day" until 36 hours
/// - under 26 days: "N days", then "a month" until 46 days
/// - under 11 months: "N months", then "a year" until 18 months
/// - beyond: "N years"
pub fn relative_time(created_at: i64, now: DateTime<Utc>) -> String {
    let Some(created) = DateTime::from_timestamp(created_at, 0) else {
        return String::new();
    };

    let diff = now.signed_duration_since(created).num_seconds();
    let secs = diff.unsigned_abs() as f64;

    let minutes = (secs / 60.0).round() as u64;
    let hours = (secs / 3600.0).round() as u64;
    let days = (secs / 86400.0).round() as u64;
    let months = (secs / 86400.0 / 30.4375).round() as u64;
    let years = (secs / 86400.0 / 365.25).round() as u64;

    let span = if secs < 45.0 {
        "a few seconds".to_string()
    } else if secs < 90.0 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{} hours", hours)
    } else if hours < 36 {
        "a day".to_string()
    } else if days < 26 {
        format!("{} days", days)
    } else if days < 46 {
        "a month".to_string()
    } else if months < 11 {
        format!("{} months", months)
    } else if months < 18 {
        "a year".to_string()
    } else {
        format!("{} years", years.max(2))
    };

    if diff < 0 {
        format!("in {}", span)
    } else {
        format!("{} ago", span)
    }
}
