//! Body parsing pipeline and line-oriented splitting

use crate::analysis::{analyze_keywords, detect_language, text_stats_at};
use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::extracted::{ExtractedEntities, extract_email_addresses};
use crate::html::{clean_html, html_to_markdown, unescape_markdown};
use crate::types::{ContentType, ParsedContent, RawEmailBody, Recipient};
use regex::RegexSet;
use tracing::{debug, warn};

// Reply and forward markers. The first matching line and everything after
// it is quoted.
static QUOTE_MARKERS: std::sync::LazyLock<RegexSet> = std::sync::LazyLock::new(|| {
    RegexSet::new([
        r"(?i)^\s*>",
        r"(?i)^On .* wrote:",
        r"(?i)^From:",
        r"(?i)^-+\s*Original Message\s*-+",
        r"(?i)^_{5,}",
    ])
    .unwrap()
});

static SIGNATURE_MARKERS: std::sync::LazyLock<RegexSet> = std::sync::LazyLock::new(|| {
    RegexSet::new([
        r"(?i)^\s*--\s*$",
        r"(?i)^\s*_{3,}\s*$",
        r"(?i)^\s*Best regards?\s*,?\s*$",
        r"(?i)^\s*Sincerely\s*,?\s*$",
        r"(?i)^\s*Thanks?\s*,?\s*$",
        r"(?i)^\s*Sent from my .*$",
    ])
    .unwrap()
});

const NO_PREVIEW: &str = "No preview available";

/// Run the full pipeline over a body with the default configuration
#[must_use]
pub fn parse_body(raw: &RawEmailBody) -> ParsedContent {
    parse_body_with(raw, &ParserConfig::default())
}

/// Run the full pipeline over a body with caller-supplied options
#[must_use]
pub fn parse_body_with(raw: &RawEmailBody, config: &ParserConfig) -> ParsedContent {
    parse_message("", raw, config)
}

/// Run the full pipeline, taking `subject` into account for keyword triage.
///
/// HTML bodies are rendered both as collapsed text and as Markdown. The
/// line-oriented splits and the statistics run over the Markdown, which
/// keeps paragraph breaks and renders `<blockquote>` as `>` lines, with its
/// backslash escapes removed so rules like `_____` still read as markers.
/// Mentions and language are taken from the collapsed text.
#[must_use]
pub fn parse_message(subject: &str, raw: &RawEmailBody, config: &ParserConfig) -> ParsedContent {
    let content = raw.content_str();

    let (plain_text, markdown) = match raw.content_type {
        ContentType::Html => (clean_html(content), html_to_markdown(content)),
        ContentType::Text => (content.to_string(), content.to_string()),
    };

    let line_text = match raw.content_type {
        ContentType::Html => unescape_markdown(&markdown),
        ContentType::Text => content.to_string(),
    };

    let (new_content, quoted_content) = extract_quoted_text(&line_text);
    let (body_without_signature, signature) = extract_signature(&line_text);
    let stats = text_stats_at(&line_text, config.words_per_minute);
    let extracted = ExtractedEntities::extract(&plain_text);
    let language_guess = detect_language(&plain_text);
    let preview = body_preview(&plain_text, config.preview_chars);
    let analysis = analyze_keywords(subject, &preview);

    debug!(
        "Parsed {:?} body: {} words, {} mentions, language {}",
        raw.content_type,
        stats.word_count,
        extracted.total_count(),
        language_guess
    );

    ParsedContent {
        plain_text,
        markdown,
        new_content,
        quoted_content,
        body_without_signature,
        signature,
        extracted_emails: extracted.emails,
        extracted_urls: extracted.urls,
        extracted_phones: extracted.phone_numbers,
        extracted_dates: extracted.dates,
        language_guess,
        stats,
        preview,
        analysis,
    }
}

/// Parse an address list such as `"Jane" <jane@example.com>, bob@example.com`.
///
/// Group syntax is flattened and entries without an address are dropped.
/// If the list does not parse, bare addresses are pulled out of it instead.
#[must_use]
pub fn parse_recipient_string(text: &str) -> Vec<Recipient> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    parse_address_list(text).unwrap_or_else(|e| {
        warn!("{e}; extracting bare addresses");
        recipients_from_text(text)
    })
}

fn parse_address_list(text: &str) -> Result<Vec<Recipient>> {
    let list = mailparse::addrparse(text).map_err(|e| ParseError::Address {
        input: text.to_string(),
        details: e.to_string(),
    })?;

    let mut recipients = Vec::new();
    for addr in list.iter() {
        match addr {
            mailparse::MailAddr::Single(info) => push_single(&mut recipients, info),
            mailparse::MailAddr::Group(group) => {
                for info in &group.addrs {
                    push_single(&mut recipients, info);
                }
            }
        }
    }

    Ok(recipients)
}

fn push_single(recipients: &mut Vec<Recipient>, info: &mailparse::SingleInfo) {
    if info.addr.trim().is_empty() {
        return;
    }
    recipients.push(Recipient::new(
        info.display_name.as_deref().unwrap_or_default(),
        info.addr.as_str(),
    ));
}

fn recipients_from_text(text: &str) -> Vec<Recipient> {
    extract_email_addresses(text)
        .into_iter()
        .map(|email| Recipient::new("", email))
        .collect()
}

/// Separate new content from quoted or forwarded content.
///
/// Returns `(new, quoted)`. The quoted part starts at the first line that
/// looks like a quote (`>`), an attribution (`On ... wrote:`), a forwarded
/// header (`From:`), an Outlook `Original Message` banner or a long
/// underscore rule, and runs to the end of the body.
#[must_use]
pub fn extract_quoted_text(body: &str) -> (String, String) {
    split_at_marker(body, &QUOTE_MARKERS)
}

/// Separate the body from its signature.
///
/// Returns `(body, signature)`. The signature starts at a `--` or
/// underscore rule, a sign-off line (`Best regards`, `Sincerely`,
/// `Thanks`) or a `Sent from my ...` mobile footer.
#[must_use]
pub fn extract_signature(body: &str) -> (String, String) {
    split_at_marker(body, &SIGNATURE_MARKERS)
}

fn split_at_marker(body: &str, markers: &RegexSet) -> (String, String) {
    if body.is_empty() {
        return (String::new(), String::new());
    }

    let lines: Vec<&str> = body.split('\n').collect();
    let split = lines
        .iter()
        .position(|line| markers.is_match(line))
        .unwrap_or(lines.len());

    if split < lines.len() {
        debug!("Split marker found on line {}", split + 1);
    }

    let (head, tail) = lines.split_at(split);
    (
        head.join("\n").trim().to_string(),
        tail.join("\n").trim().to_string(),
    )
}

/// First `max_chars` characters of `text`
#[must_use]
pub fn body_preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Trimmed preview with `...` appended when `text` was cut short
#[must_use]
pub fn short_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NO_PREVIEW.to_string();
    }

    let mut preview: String = trimmed.chars().take(max_chars).collect();
    if trimmed.chars().nth(max_chars).is_some() {
        preview.push_str("...");
    }
    preview
}
