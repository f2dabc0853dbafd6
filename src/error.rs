//! Error types for message ingestion and settings persistence.

use thiserror::Error;

/// Failure to turn a stored message into a renderable [`crate::message::Message`].
#[derive(Debug, Error)]
pub enum MessageError {
    /// The record is flagged as an embed but carries no payload at all.
    #[error("message is flagged as an embed but has no embed payload")]
    MissingEmbed,
    /// The embed payload is not valid JSON or lacks a `type` discriminator.
    #[error("malformed embed payload: {source}")]
    MalformedEmbed {
        #[source]
        source: serde_json::Error,
    },
}

impl MessageError {
    /// Both variants mean the embed cannot be shown.
    pub fn is_malformed_embed(&self) -> bool {
        matches!(self, Self::MissingEmbed | Self::MalformedEmbed { .. })
    }
}

/// Failure to read or write `settings.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
