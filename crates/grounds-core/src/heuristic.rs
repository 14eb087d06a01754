//! Deterministic note analysis used when the language model is unavailable.
//!
//! Matching is plain substring presence on the lower-cased note, not tokenized
//! word matching: "hated" hits "hate", and repeated words count once.

use crate::defaults::{SUMMARY_ELLIPSIS, SUMMARY_MAX_CHARS, SUMMARY_TRUNCATED_CHARS};
use crate::models::{NoteAnalysis, Sentiment};

/// Words that push the score up by one each when present.
pub const POSITIVE_WORDS: [&str; 5] = ["great", "good", "amazing", "love", "nice"];

/// Words that push the score down by one each when present.
pub const NEGATIVE_WORDS: [&str; 5] = ["bad", "terrible", "awful", "hate", "loud"];

/// Tag rules in detection order: any needle present emits the tag.
const TAG_RULES: &[(&[&str], &str)] = &[
    (&["outlet"], "many-outlets"),
    (&["loud"], "loud"),
    (&["quiet"], "quiet"),
    (&["cold brew"], "cold-brew"),
    (&["wifi", "wi-fi"], "good-wifi"),
    (&["study", "studying"], "study-friendly"),
];

/// Analyze a note without any external call.
pub fn fallback_analysis(text: &str) -> NoteAnalysis {
    let lower = text.to_lowercase();

    NoteAnalysis {
        summary: summarize(text),
        sentiment: Sentiment::from_score(lexicon_score(&lower)),
        tags: detect_tags(&lower),
    }
}

fn lexicon_score(lower: &str) -> i32 {
    let hits = |words: &[&str]| words.iter().filter(|w| lower.contains(*w)).count() as i32;
    hits(&POSITIVE_WORDS) - hits(&NEGATIVE_WORDS)
}

fn detect_tags(lower: &str) -> Vec<String> {
    TAG_RULES
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, tag)| tag.to_string())
        .collect()
}

/// Trimmed note, cut to 137 characters plus `...` when longer than 140.
fn summarize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= SUMMARY_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut summary: String = trimmed.chars().take(SUMMARY_TRUNCATED_CHARS).collect();
    summary.push_str(SUMMARY_ELLIPSIS);
    summary
}
