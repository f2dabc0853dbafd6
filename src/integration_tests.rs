//! Integration tests for phone-chat
//!
//! These tests exercise full flows across modules: stored rows through
//! ingestion, classification and layout, and composer text through the
//! emoji parse step, rendering and reconciliation.

use std::collections::HashMap;

use chrono::DateTime;

use crate::bubble::{layout, Alignment, BubbleStyleKey, Contact};
use crate::classify::{classify, RenderDecision, RenderVariant};
use crate::config::Settings;
use crate::editor::{
    is_token_unit, Document, EditorNode, KeyGen, TokenUnit, TOKEN_INNER_CLASS,
};
use crate::error::MessageError;
use crate::message::{Message, StoredMessage};

fn row(author: &str, message: &str) -> StoredMessage {
    StoredMessage {
        author: author.to_string(),
        message: message.to_string(),
        created_at: 1651357807,
        ..Default::default()
    }
}

/// The five example scenarios, end to end from JSON rows
#[test]
fn test_example_scenarios_from_json() {
    let rows = r#"[
        {"author":"555","message":"x","createdAt":1651357807,"is_system":true},
        {"author":"111","message":"cap","createdAt":1651357807,
         "is_embed":true,"embed":"{\"type\":\"audio\"}"},
        {"author":"1","message":"https://x.com/a.png","createdAt":1651357807},
        {"author":"1","message":"hello world","createdAt":1651357807}
    ]"#;
    let stored: Vec<StoredMessage> = serde_json::from_str(rows).unwrap();
    let messages: Vec<Message> = stored
        .into_iter()
        .map(|s| Message::ingest(s).unwrap())
        .collect();

    let system = classify(&messages[0], "555");
    assert_eq!(system.variant(), RenderVariant::System);
    assert!(system.is_mine());

    let audio = classify(&messages[1], "222");
    assert_eq!(audio.variant(), RenderVariant::AudioEmbed);
    assert!(!audio.is_mine());

    let image = classify(&messages[2], "1");
    assert_eq!(image.variant(), RenderVariant::Image);
    assert!(image.is_mine());
    assert!(image.show_secondary_action());

    let text = classify(&messages[3], "2");
    assert_eq!(text.variant(), RenderVariant::PlainText);
    assert!(!text.is_mine());
    assert!(!text.show_secondary_action());
}

/// Exactly one variant per flag combination, system always first
#[test]
fn test_variant_priority_grid() {
    let embeds = [None, Some(r#"{"type":"audio"}"#), Some(r#"{"type":"gif"}"#)];
    let texts = ["https://x.com/a.png", "plain"];

    for is_system in [false, true] {
        for embed in embeds {
            for text in texts {
                let stored = StoredMessage {
                    is_system,
                    is_embed: embed.is_some(),
                    embed: embed.map(String::from),
                    ..row("1", text)
                };
                let msg = Message::ingest(stored).unwrap();
                let variant = classify(&msg, "2").variant();
                let expected = match (is_system, embed, text) {
                    (true, _, _) => RenderVariant::System,
                    (false, Some(e), _) if e.contains("audio") => RenderVariant::AudioEmbed,
                    (false, Some(_), _) => RenderVariant::OtherEmbed,
                    (false, None, "plain") => RenderVariant::PlainText,
                    (false, None, _) => RenderVariant::Image,
                };
                assert_eq!(
                    variant, expected,
                    "system={} embed={:?} text={}",
                    is_system, embed, text
                );
            }
        }
    }
}

/// Malformed embeds surface at ingestion and never degrade to plain text
#[test]
fn test_malformed_embed_is_an_error() {
    let stored = StoredMessage {
        is_embed: true,
        embed: Some("{\"type\":".to_string()),
        ..row("1", "hello world")
    };
    let err = Message::ingest(stored).unwrap_err();
    assert!(matches!(err, MessageError::MalformedEmbed { .. }));
    assert!(err.to_string().starts_with("malformed embed payload"));
}

/// Classified messages lay out with settings-driven styles
#[test]
fn test_classify_layout_and_styles() {
    let settings = Settings::default();
    let styles = settings.bubble_styles();
    let mut contacts = HashMap::new();
    contacts.insert(
        "111".to_string(),
        Contact {
            number: "111".into(),
            display: "Taso".into(),
            avatar: None,
        },
    );
    let now = DateTime::from_timestamp(1651357807 + 120, 0).unwrap();

    let msg = Message::ingest(row("111", "https://x.com/dog.gif")).unwrap();
    let decision = classify(&msg, &settings.local_identity);
    assert!(matches!(decision, RenderDecision::Image { is_mine: false, .. }));

    let bubble = layout(&msg, &decision, &contacts, now);
    assert_eq!(bubble.alignment, Alignment::Start);
    assert_eq!(bubble.style, BubbleStyleKey::Theirs);
    assert_eq!(bubble.author_label.as_deref(), Some("Taso"));
    assert_eq!(bubble.timestamp, "2 minutes ago");
    assert!(bubble.secondary_action);
    assert_eq!(styles.get(bubble.style).corner_radius, 15);
}

/// Token scenario: create, clone, render two layers
#[test]
fn test_token_clone_render() {
    let mut keys = KeyGen::new();
    let unit = TokenUnit::create("😀", "emoji", &mut keys);
    let clone = unit.clone_node();
    assert_eq!(clone.text(), unit.text());
    assert_eq!(clone.style_class(), unit.style_class());
    assert_eq!(clone.key(), unit.key());

    let dom = clone.render();
    assert_eq!(dom.class.as_deref(), Some("emoji"));
    let inner = dom.first_element().unwrap();
    assert_eq!(inner.class.as_deref(), Some(TOKEN_INNER_CLASS));
    assert_eq!(inner.text_content(), "😀");
}

/// Composer edit cycle: mount, edit, reconcile, external tampering, copy
#[test]
fn test_composer_edit_cycle() {
    let mut doc = Document::new();
    doc.insert_text("love you <3");
    let mut dom = doc.mount();
    assert_eq!(dom.len(), 2);

    // Append more text; existing nodes patch in place
    let previous = doc.snapshot();
    doc.insert_text(" :D");
    let rerendered = doc.reconcile(&previous, &mut dom);
    assert_eq!(rerendered.len(), 2);
    assert_eq!(dom.len(), 4);
    assert_eq!(doc.text_content(), "love you ❤ 😀");

    // Something outside the editor strips the heart's inner layer
    let previous = doc.snapshot();
    dom[1].children.clear();
    let rerendered = doc.reconcile(&previous, &mut dom);
    assert_eq!(rerendered, vec![doc.nodes()[1].key()]);
    assert_eq!(
        dom[1].first_element().and_then(|e| e.class.as_deref()),
        Some(TOKEN_INNER_CLASS)
    );

    // Selections never land inside a token
    assert_eq!(doc.snap_offset(1, 0), 0);
    assert_eq!(doc.snap_offset(1, 1), 1);

    // A copied document shares text but not keys
    let copy = doc.copy();
    assert_eq!(copy.text_content(), doc.text_content());
    let tokens = copy.nodes().iter().filter(|n| is_token_unit(n)).count();
    assert_eq!(tokens, 2);
    assert!(copy
        .nodes()
        .iter()
        .all(|n| doc.node_index(n.key()).is_none()));
    assert!(matches!(copy.nodes()[1], EditorNode::Token(_)));
}
