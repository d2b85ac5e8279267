//! Readability statistics, language guess and keyword triage

use crate::config::DEFAULT_WORDS_PER_MINUTE;
use crate::types::{KeywordAnalysis, Language, Sentiment, Tag, TextStats};
use regex::Regex;

static SENTENCE_END_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

// Each list is scored by substring containment, so a marker counts once
// no matter how often it occurs. `por` is listed twice for Spanish and
// therefore weighs double.
const LANGUAGE_MARKERS: [(Language, [&str; 10]); 4] = [
    (
        Language::English,
        ["the", "and", "you", "that", "was", "for", "are", "with", "his", "they"],
    ),
    (
        Language::Spanish,
        ["que", "por", "con", "una", "los", "del", "las", "para", "por", "como"],
    ),
    (
        Language::French,
        ["que", "dans", "pour", "avec", "sur", "par", "mais", "ses", "vous", "comme"],
    ),
    (
        Language::German,
        ["der", "und", "die", "von", "den", "mit", "auf", "für", "ist", "das"],
    ),
];

const TAG_KEYWORDS: [(Tag, &[&str]); 5] = [
    (Tag::Urgent, &["urgent", "asap", "immediately", "critical"]),
    (Tag::Meeting, &["meeting", "call", "schedule", "calendar"]),
    (Tag::Project, &["project", "task", "deadline", "deliverable"]),
    (Tag::Financial, &["invoice", "payment", "bill", "cost"]),
    (Tag::Report, &["report", "analysis", "data", "results"]),
];

const POSITIVE_WORDS: &[&str] = &["thank", "great", "excellent", "good", "happy"];
const NEGATIVE_WORDS: &[&str] = &["problem", "issue", "error", "wrong", "bad"];
const HIGH_PRIORITY_WORDS: &[&str] = &["urgent", "asap", "critical", "immediate"];
const LOW_PRIORITY_WORDS: &[&str] = &["fyi", "info", "notification"];

/// Guess the language of `text` from common function words.
///
/// Markers are matched as substrings of the lower-cased text, not as whole
/// words, so "other" scores "the" for English. Ties go to the language
/// listed first (English, Spanish, French, German).
#[must_use]
pub fn detect_language(text: &str) -> Language {
    if text.is_empty() {
        return Language::Unknown;
    }

    let lower = text.to_lowercase();
    let mut best = (Language::Unknown, 0);

    for (language, markers) in &LANGUAGE_MARKERS {
        let score = markers.iter().filter(|m| lower.contains(*m)).count();
        if score > best.1 {
            best = (*language, score);
        }
    }

    best.0
}

/// Minutes to read `text` at 225 words per minute, at least one for any
/// non-empty text
#[must_use]
pub fn calculate_reading_time(text: &str) -> usize {
    reading_time_at(text, DEFAULT_WORDS_PER_MINUTE)
}

pub(crate) fn reading_time_at(text: &str, words_per_minute: u32) -> usize {
    if text.is_empty() {
        return 0;
    }
    minutes_for(text.split_whitespace().count(), words_per_minute)
}

// Rounded to nearest. A half is unreachable for odd rates, and an even
// rate rounds halves up.
fn minutes_for(words: usize, words_per_minute: u32) -> usize {
    let wpm = usize::try_from(words_per_minute.max(1)).unwrap_or(usize::MAX);
    ((words + wpm / 2) / wpm).max(1)
}

/// Character, word, sentence and paragraph counts plus reading time
#[must_use]
pub fn text_stats(text: &str) -> TextStats {
    text_stats_at(text, DEFAULT_WORDS_PER_MINUTE)
}

pub(crate) fn text_stats_at(text: &str, words_per_minute: u32) -> TextStats {
    if text.is_empty() {
        return TextStats::default();
    }

    let word_count = text.split_whitespace().count();

    TextStats {
        character_count: text.chars().count(),
        word_count,
        sentence_count: SENTENCE_END_REGEX.find_iter(text).count(),
        paragraph_count: text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count(),
        reading_time_minutes: minutes_for(word_count, words_per_minute),
    }
}

/// Tag, sentiment and priority hints from keywords in the subject and body
#[must_use]
pub fn analyze_keywords(subject: &str, text: &str) -> KeywordAnalysis {
    let haystack = format!("{subject} {text}").to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| haystack.contains(w));

    let tags = TAG_KEYWORDS
        .iter()
        .filter(|(_, words)| mentions(*words))
        .map(|(tag, _)| *tag)
        .collect();

    let sentiment = if mentions(POSITIVE_WORDS) {
        Sentiment::Positive
    } else if mentions(NEGATIVE_WORDS) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let priority_score = if mentions(HIGH_PRIORITY_WORDS) {
        8
    } else if mentions(LOW_PRIORITY_WORDS) {
        3
    } else {
        5
    };

    KeywordAnalysis {
        tags,
        sentiment,
        priority_score,
    }
}
