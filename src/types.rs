//! Core types for parsed email content

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Raw email body as handed over by the mail retrieval layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmailBody {
    /// Declared content type of `content`
    #[serde(default)]
    pub content_type: ContentType,

    /// Body markup or text, if any was delivered
    #[serde(default)]
    pub content: Option<String>,
}

impl RawEmailBody {
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Html,
            content: Some(content.into()),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Text,
            content: Some(content.into()),
        }
    }

    /// Decode a Graph `itemBody` object (`{"contentType": ..., "content": ...}`)
    pub fn from_graph_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::ParseError::Json(e.to_string()))
    }

    /// Body content, or an empty string when missing
    #[must_use]
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content_str().trim().is_empty()
    }
}

/// Body content type
///
/// Anything other than a case-insensitive `text` is treated as HTML, which is
/// what Graph delivers by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContentType {
    #[default]
    Html,
    Text,
}

impl ContentType {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Html
        }
    }
}

impl From<String> for ContentType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Everything derived from a single email body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContent {
    /// Visible text with whitespace collapsed
    pub plain_text: String,

    /// Markdown rendering (the raw text for plain-text bodies)
    pub markdown: String,

    /// Lines before the first quote marker
    pub new_content: String,

    /// Quote marker line and everything after it
    pub quoted_content: String,

    /// Lines before the first signature marker
    pub body_without_signature: String,

    /// Signature marker line and everything after it
    pub signature: String,

    pub extracted_emails: BTreeSet<String>,
    pub extracted_urls: BTreeSet<String>,
    pub extracted_phones: BTreeSet<String>,
    pub extracted_dates: BTreeSet<String>,

    /// Coarse language guess over the plain text
    pub language_guess: Language,

    pub stats: TextStats,

    /// Leading slice of the plain text, suitable for a list view
    pub preview: String,

    /// Keyword triage hints
    pub analysis: KeywordAnalysis,
}

impl ParsedContent {
    /// Check whether the body contained a reply quote
    #[must_use]
    pub fn has_quoted_content(&self) -> bool {
        !self.quoted_content.is_empty()
    }

    #[must_use]
    pub fn has_signature(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Total number of mentions extracted
    #[must_use]
    pub fn mention_count(&self) -> usize {
        self.extracted_emails.len()
            + self.extracted_urls.len()
            + self.extracted_phones.len()
            + self.extracted_dates.len()
    }
}

/// One entry of a parsed recipient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Display name, empty when none was given
    pub name: String,

    pub email: String,

    /// `name <email>` or just `email`
    pub display: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        let display = if name.is_empty() {
            email.clone()
        } else {
            format!("{name} <{email}>")
        };

        Self {
            name,
            email,
            display,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// Guessed body language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    #[default]
    Unknown,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::German => "german",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readability statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub reading_time_minutes: usize,
}

/// Keyword-based triage of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Topic tags, in a fixed order
    pub tags: Vec<Tag>,

    pub sentiment: Sentiment,

    /// 1-10, higher is more pressing
    pub priority_score: u8,
}

impl Default for KeywordAnalysis {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            sentiment: Sentiment::Neutral,
            priority_score: 5,
        }
    }
}

/// Topic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Urgent,
    Meeting,
    Project,
    Financial,
    Report,
}

/// Sentiment hint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}
