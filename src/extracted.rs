//! Mention extraction from email content
//!
//! The patterns are deliberately loose; they match what a reader would call
//! an address, link, phone number or date in running text, not what the
//! relevant RFCs allow.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// All mentions extracted from a piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub emails: BTreeSet<String>,
    pub urls: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    pub dates: BTreeSet<String>,
}

static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static URL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"https?://(?:[-\w.])+(?:[:\d]+)?(?:/(?:[\w/_.])*(?:\?(?:[\w&=%.])*)?(?:#(?:[\w.])*)?)?",
    )
    .unwrap()
});

// A word boundary cannot precede `(` or `+` after whitespace, so only the
// trailing edge is anchored on those two.
static PHONE_REGEXES: std::sync::LazyLock<[Regex; 3]> = std::sync::LazyLock::new(|| {
    [
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        Regex::new(r"\(\d{3}\)\s?\d{3}[-.]?\d{4}\b").unwrap(),
        Regex::new(r"\+\d{1,3}[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}\b").unwrap(),
    ]
});

static DATE_REGEXES: std::sync::LazyLock<[Regex; 4]> = std::sync::LazyLock::new(|| {
    [
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
        Regex::new(r"\b\d{1,2}-\d{1,2}-\d{2,4}\b").unwrap(),
        Regex::new(
            r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{2,4}\b",
        )
        .unwrap(),
        Regex::new(
            r"(?i)\b\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{2,4}\b",
        )
        .unwrap(),
    ]
});

impl ExtractedEntities {
    /// Extract all mentions from text content
    #[must_use]
    pub fn extract(text: &str) -> Self {
        Self {
            emails: extract_email_addresses(text),
            urls: extract_urls(text),
            phone_numbers: extract_phone_numbers(text),
            dates: extract_dates(text),
        }
    }

    /// Check if any mentions were extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.urls.is_empty()
            && self.phone_numbers.is_empty()
            && self.dates.is_empty()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.emails.len() + self.urls.len() + self.phone_numbers.len() + self.dates.len()
    }
}

/// Email addresses appearing as whole words
#[must_use]
pub fn extract_email_addresses(text: &str) -> BTreeSet<String> {
    collect_matches(std::slice::from_ref(&*EMAIL_REGEX), text)
}

/// `http`/`https` links
#[must_use]
pub fn extract_urls(text: &str) -> BTreeSet<String> {
    collect_matches(std::slice::from_ref(&*URL_REGEX), text)
}

/// US, parenthesised-area-code and international phone numbers
#[must_use]
pub fn extract_phone_numbers(text: &str) -> BTreeSet<String> {
    collect_matches(&*PHONE_REGEXES, text)
}

/// Numeric (`1/2/2024`, `1-2-24`) and named-month (`Jan 5, 2024`,
/// `5 January 2024`) dates
#[must_use]
pub fn extract_dates(text: &str) -> BTreeSet<String> {
    collect_matches(&*DATE_REGEXES, text)
}

fn collect_matches(patterns: &[Regex], text: &str) -> BTreeSet<String> {
    patterns
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_matches_unions_patterns() {
        let found = extract_phone_numbers("555-123-4567 and again 555-123-4567");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(ExtractedEntities::extract("").is_empty());
    }
}
