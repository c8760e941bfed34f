//! Rule-based engagement suggestions.
//!
//! A fixed, ordered table of independent predicates over the extracted
//! text. Every rule is evaluated; the messages of the rules that fire are
//! returned in table order. When none fire, the single
//! [`ALREADY_OPTIMIZED`] message is returned instead, so the output is
//! never empty.

use once_cell::sync::Lazy;
use regex::Regex;

/// Emitted when no rule fires.
pub const ALREADY_OPTIMIZED: &str = "Your content is already optimized.";

/// Posts shorter than this many UTF-16 code units are flagged.
pub const MIN_LENGTH: usize = 50;

/// Posts longer than this many UTF-16 code units are flagged.
pub const MAX_LENGTH: usize = 280;

/// The glyphs that count as "has an emoji". Deliberately a closed set.
pub const ENGAGEMENT_EMOJI: [char; 8] = ['😊', '😂', '😍', '🔥', '⭐', '✨', '❤', '👍'];

// `#` followed by at least one ASCII word character
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(http|www\.)").unwrap());

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    /// Stable identifier, used in logs.
    pub name: &'static str,
    /// Returns true when `message` should be suggested.
    pub predicate: fn(&str) -> bool,
    /// Advice shown to the user.
    pub message: &'static str,
}

impl SuggestionRule {
    /// Evaluate this rule against the text.
    pub fn fires(&self, text: &str) -> bool {
        (self.predicate)(text)
    }
}

static RULES: [SuggestionRule; 6] = [
    SuggestionRule {
        name: "too_short",
        predicate: is_too_short,
        message: "Post is very short. Add more context.",
    },
    SuggestionRule {
        name: "too_long",
        predicate: is_too_long,
        message: "Post is long. Shorten for readability.",
    },
    SuggestionRule {
        name: "missing_call_to_action",
        predicate: lacks_call_to_action,
        message: "Add a CTA or engaging question.",
    },
    SuggestionRule {
        name: "missing_hashtag",
        predicate: lacks_hashtag,
        message: "Add 1–3 relevant hashtags.",
    },
    SuggestionRule {
        name: "missing_emoji",
        predicate: lacks_emoji,
        message: "Use 1–2 emojis to improve engagement.",
    },
    SuggestionRule {
        name: "missing_link",
        predicate: lacks_link,
        message: "Add a link if relevant.",
    },
];

/// The rule table, in evaluation order.
pub fn rules() -> &'static [SuggestionRule] {
    &RULES
}

/// Produce engagement suggestions for `text`.
///
/// Pure and total: the same input always yields the same non-empty list.
/// Callers are expected to pass already-trimmed text.
pub fn suggest(text: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = RULES
        .iter()
        .filter(|rule| rule.fires(text))
        .map(|rule| rule.message.to_string())
        .collect();

    if suggestions.is_empty() {
        suggestions.push(ALREADY_OPTIMIZED.to_string());
    }

    suggestions
}

// Length in UTF-16 code units, so astral emoji count as two.
fn post_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn is_too_short(text: &str) -> bool {
    post_len(text) < MIN_LENGTH
}

fn is_too_long(text: &str) -> bool {
    post_len(text) > MAX_LENGTH
}

fn lacks_call_to_action(text: &str) -> bool {
    !text.contains(['!', '?'])
}

fn lacks_hashtag(text: &str) -> bool {
    !HASHTAG.is_match(text)
}

fn lacks_emoji(text: &str) -> bool {
    !text.contains(ENGAGEMENT_EMOJI)
}

fn lacks_link(text: &str) -> bool {
    !LINK.is_match(text)
}
