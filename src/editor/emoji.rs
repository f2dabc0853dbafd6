//! Shortcode parse step: turns `:)`, `<3` and friends into emoji tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use super::key::KeyGen;
use super::node::EditorNode;
use super::text::TextNode;
use super::token::TokenUnit;

/// Shortcode (or bare glyph) to `(style class, glyph)`.
pub const EMOJIS: &[(&str, &str, &str)] = &[
    (":)", "emoji happysmile", "🙂"),
    (":D", "emoji veryhappysmile", "😀"),
    (":(", "emoji unhappysmile", "🙁"),
    ("<3", "emoji heart", "❤"),
    (";)", "emoji winksmile", "😉"),
    (":P", "emoji tongue", "😛"),
    ("🙂", "emoji happysmile", "🙂"),
    ("😀", "emoji veryhappysmile", "😀"),
    ("🙁", "emoji unhappysmile", "🙁"),
    ("❤", "emoji heart", "❤"),
    ("😉", "emoji winksmile", "😉"),
    ("😛", "emoji tongue", "😛"),
];

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = EMOJIS
        .iter()
        .map(|(code, _, _)| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("emoji shortcode pattern is valid")
});

pub fn lookup(code: &str) -> Option<(&'static str, &'static str)> {
    EMOJIS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, class, glyph)| (*class, *glyph))
}

/// Split `text` into plain text nodes and emoji tokens, in order.
pub fn tokenize(text: &str, keys: &mut KeyGen) -> Vec<EditorNode> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for m in EMOJI_RE.find_iter(text) {
        let Some((class, glyph)) = lookup(m.as_str()) else {
            continue;
        };
        if m.start() > last {
            nodes.push(TextNode::new(&text[last..m.start()], keys).into());
        }
        nodes.push(TokenUnit::create(glyph, class, keys).into());
        last = m.end();
    }

    if last < text.len() {
        nodes.push(TextNode::new(&text[last..], keys).into());
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::node::is_token_unit;

    #[test]
    fn test_tokenize_mixed() {
        let mut keys = KeyGen::new();
        let nodes = tokenize("hi :) see you <3", &mut keys);
        let summary: Vec<(bool, &str)> =
            nodes.iter().map(|n| (is_token_unit(n), n.text())).collect();
        assert_eq!(
            summary,
            vec![(false, "hi "), (true, "🙂"), (false, " see you "), (true, "❤")]
        );
        match &nodes[1] {
            EditorNode::Token(unit) => assert_eq!(unit.style_class(), "emoji happysmile"),
            other => panic!("expected token, got {:?}", other),
        }

        let nodes = tokenize(";) ok :P", &mut keys);
        let summary: Vec<(bool, &str)> =
            nodes.iter().map(|n| (is_token_unit(n), n.text())).collect();
        assert_eq!(summary, vec![(true, "😉"), (false, " ok "), (true, "😛")]);
        match &nodes[2] {
            EditorNode::Token(unit) => assert_eq!(unit.style_class(), "emoji tongue"),
            other => panic!("expected token, got {:?}", other),
        }
    }

    #[test]
    fn test_tokenize_plain_and_empty() {
        let mut keys = KeyGen::new();
        let nodes = tokenize("no emoji here", &mut keys);
        assert_eq!(nodes.len(), 1);
        assert!(!is_token_unit(&nodes[0]));
        assert!(tokenize("", &mut keys).is_empty());
    }

    #[test]
    fn test_tokenize_adjacent_and_glyphs() {
        let mut keys = KeyGen::new();
        let nodes = tokenize(":D:(😀", &mut keys);
        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(is_token_unit));
        assert_eq!(nodes[2].text(), "😀");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("<3"), Some(("emoji heart", "❤")));
        assert_eq!(lookup(":/"), None);
    }
}
