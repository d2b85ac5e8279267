// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Content Parser
//!
//! Stateless normalization of raw email bodies, as fetched from a mail API,
//! into text that is easy to store, search and summarise.
//!
//! # Features
//!
//! - HTML to collapsed plain text and to Markdown
//! - New content vs quoted reply separation
//! - Body vs signature separation
//! - Mention extraction (email addresses, URLs, phone numbers, dates)
//! - Readability statistics and reading time
//! - Coarse language guess and keyword triage
//!
//! Every body-level operation is total: malformed markup degrades to a
//! simpler rendering instead of failing.
//!
//! # Example
//!
//! ```rust
//! use email_content::{RawEmailBody, parse_body};
//!
//! let raw = RawEmailBody::html("<p>Call me at 555-123-4567</p><blockquote>old</blockquote>");
//! let parsed = parse_body(&raw);
//!
//! println!("Text: {}", parsed.plain_text);
//! println!("Phones: {:?}", parsed.extracted_phones);
//! ```

mod analysis;
mod config;
mod error;
mod extracted;
mod graph;
mod html;
mod parser;
mod types;

pub use analysis::{analyze_keywords, calculate_reading_time, detect_language, text_stats};
pub use config::{DEFAULT_PREVIEW_CHARS, DEFAULT_WORDS_PER_MINUTE, ParserConfig};
pub use error::{ParseError, Result};
pub use extracted::*;
pub use graph::parse_graph_datetime;
pub use html::{clean_html, html_to_markdown};
pub use parser::{
    body_preview, extract_quoted_text, extract_signature, parse_body, parse_body_with,
    parse_message, parse_recipient_string, short_preview,
};
pub use types::*;
