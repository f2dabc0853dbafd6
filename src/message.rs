//! Message records as they come out of the store, and their ingested form.
//!
//! The store hands out [`StoredMessage`] values whose embed is still a JSON
//! string. [`Message::ingest`] parses that string exactly once so the render
//! path never touches JSON again.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MessageError;

/// Embed discriminator for voice messages.
pub const AUDIO_EMBED: &str = "audio";

/// Wire shape of a message row.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StoredMessage {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub conversation_id: String,
    pub author: String,
    pub message: String,
    /// Seconds since the epoch.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub is_embed: bool,
    /// Serialized embed, only meaningful when `is_embed` is set.
    #[serde(default)]
    pub embed: Option<String>,
}

/// Structured attachment carried by an embed message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: String,
    /// Everything besides the discriminator (audio url, link preview, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Embed {
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        serde_json::from_str(raw).map_err(|source| MessageError::MalformedEmbed { source })
    }

    pub fn is_audio(&self) -> bool {
        self.kind == AUDIO_EMBED
    }

    /// String field lookup, e.g. `embed.field("url")`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

/// What a message carries, after ingestion.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    /// Free text, possibly a media URL.
    Text,
    /// Generated by the phone itself (member added, conversation renamed, ...).
    System,
    Embed(Embed),
}

/// A message ready for classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub conversation_id: String,
    pub author: String,
    pub message: String,
    pub created_at: i64,
    pub content: MessageContent,
}

impl Message {
    /// Parse the embed once and fix the message content.
    ///
    /// System messages win over embeds and never look at the payload.
    pub fn ingest(stored: StoredMessage) -> Result<Self, MessageError> {
        let content = if stored.is_system {
            MessageContent::System
        } else if stored.is_embed {
            let raw = stored.embed.as_deref().ok_or(MessageError::MissingEmbed)?;
            MessageContent::Embed(Embed::parse(raw)?)
        } else {
            MessageContent::Text
        };

        Ok(Self {
            id: stored.id,
            conversation_id: stored.conversation_id,
            author: stored.author,
            message: stored.message,
            created_at: stored.created_at,
            content,
        })
    }

    /// Plain text message.
    pub fn text(author: impl Into<String>, message: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: 0,
            conversation_id: String::new(),
            author: author.into(),
            message: message.into(),
            created_at,
            content: MessageContent::Text,
        }
    }

    pub fn with_content(mut self, content: MessageContent) -> Self {
        self.content = content;
        self
    }

    pub fn is_system(&self) -> bool {
        matches!(self.content, MessageContent::System)
    }

    pub fn embed(&self) -> Option<&Embed> {
        match &self.content {
            MessageContent::Embed(embed) => Some(embed),
            _ => None,
        }
    }

    /// Ownership is a plain address comparison; two empty strings are equal.
    pub fn is_mine(&self, local_identity: &str) -> bool {
        self.author == local_identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(is_system: bool, is_embed: bool, embed: Option<&str>) -> StoredMessage {
        StoredMessage {
            author: "111".into(),
            message: "cap".into(),
            created_at: 1651357807,
            is_system,
            is_embed,
            embed: embed.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingest_audio_embed_keeps_extra_fields() {
        let msg = Message::ingest(stored(
            false,
            true,
            Some(r#"{"type":"audio","url":"https://cdn.example/clip.ogg"}"#),
        ))
        .unwrap();
        let embed = msg.embed().unwrap();
        assert!(embed.is_audio());
        assert_eq!(embed.field("url"), Some("https://cdn.example/clip.ogg"));
    }

    #[test]
    fn test_ingest_system_ignores_broken_embed() {
        let msg = Message::ingest(stored(true, true, Some("{not json"))).unwrap();
        assert!(msg.is_system());
        assert!(msg.embed().is_none());
    }

    #[test]
    fn test_ingest_malformed_embed() {
        let err = Message::ingest(stored(false, true, Some("{not json"))).unwrap_err();
        assert!(matches!(err, MessageError::MalformedEmbed { .. }));

        // Valid JSON without a discriminator is still malformed
        let err = Message::ingest(stored(false, true, Some(r#"{"url":"x"}"#))).unwrap_err();
        assert!(matches!(err, MessageError::MalformedEmbed { .. }));

        let err = Message::ingest(stored(false, true, None)).unwrap_err();
        assert!(matches!(err, MessageError::MissingEmbed));
        assert!(err.is_malformed_embed());
    }

    #[test]
    fn test_embed_payload_ignored_without_flag() {
        let msg = Message::ingest(stored(false, false, Some("{not json"))).unwrap();
        assert_eq!(msg.content, MessageContent::Text);
    }

    #[test]
    fn test_stored_message_wire_names() {
        let json = r#"{"author":"1","message":"hi","createdAt":5,
            "is_embed":true,"embed":"{\"type\":\"contact\"}"}"#;
        let stored: StoredMessage = serde_json::from_str(json).unwrap();
        assert_eq!(stored.created_at, 5);
        assert!(stored.is_embed);
        assert!(!stored.is_system);
        let msg = Message::ingest(stored).unwrap();
        assert_eq!(msg.embed().map(|e| e.kind.as_str()), Some("contact"));
    }

    #[test]
    fn test_is_mine() {
        assert!(Message::text("555", "x", 0).is_mine("555"));
        assert!(!Message::text("555", "x", 0).is_mine(""));
        assert!(Message::text("", "x", 0).is_mine(""));
    }
}
