//! HTML body normalization: visible text and Markdown

use crate::error::{ParseError, Result};
use html5ever::tendril::TendrilSink;
use htmd::HtmlToMarkdown;
use htmd::options::{BulletListMarker, HeadingStyle, Options};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;
use tracing::{debug, warn};

/// Elements dropped together with everything inside them
const INVISIBLE_TAGS: &[&str] = &[
    "head", "script", "style", "meta", "link", "title", "template", "noscript",
];

/// Elements that end a line of text
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "ul",
];

static TAG_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static BLANK_RUN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

// Backslash escapes of ASCII punctuation, as emitted by the Markdown writer
static MARKDOWN_ESCAPE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\\([!-/:-@\[-`{-~])").unwrap());

enum Step {
    Visit(Handle),
    LineBreak,
}

/// Extract readable text from HTML.
///
/// Only text nodes are kept; invisible elements are dropped with their
/// content. Each line is trimmed and split on double spaces, and the
/// surviving pieces are joined with single spaces. If the document cannot
/// be read, tags are stripped literally instead.
#[must_use]
pub fn clean_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    match parse_dom(html) {
        Ok(dom) => collapse_whitespace(&visible_text(&dom)),
        Err(e) => {
            warn!("{e}; stripping tags instead");
            strip_tags(html)
        }
    }
}

/// Convert HTML to Markdown with ATX headings and `-` bullets.
///
/// Script and style content is skipped. Three or more consecutive newlines
/// collapse to a single blank line. Falls back to [`clean_html`] when the
/// converter fails.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    match render_markdown(html) {
        Ok(markdown) => BLANK_RUN_REGEX
            .replace_all(&markdown, "\n\n")
            .trim()
            .to_string(),
        Err(e) => {
            warn!("{e}; falling back to plain text");
            clean_html(html)
        }
    }
}

/// Drop Markdown backslash escapes so the text reads as it was written
/// (`\_\_\_` back to `___`).
pub(crate) fn unescape_markdown(markdown: &str) -> String {
    MARKDOWN_ESCAPE_REGEX.replace_all(markdown, "$1").into_owned()
}

fn parse_dom(html: &str) -> Result<RcDom> {
    html5ever::parse_document(RcDom::default(), html5ever::ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ParseError::Html(e.to_string()))
}

// Iterative so that deeply nested markup cannot exhaust the stack.
fn visible_text(dom: &RcDom) -> String {
    let mut text = String::new();
    let mut stack = vec![Step::Visit(dom.document.clone())];

    while let Some(step) = stack.pop() {
        let handle = match step {
            Step::LineBreak => {
                text.push('\n');
                continue;
            }
            Step::Visit(handle) => handle,
        };

        match &handle.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                let tag: &str = &name.local;
                if INVISIBLE_TAGS.contains(&tag) {
                    continue;
                }
                if BLOCK_TAGS.contains(&tag) {
                    text.push('\n');
                    stack.push(Step::LineBreak);
                }
                push_children(&mut stack, &handle);
            }
            NodeData::Document => push_children(&mut stack, &handle),
            _ => {}
        }
    }

    text
}

fn push_children(stack: &mut Vec<Step>, handle: &Handle) {
    for child in handle.children.borrow().iter().rev() {
        stack.push(Step::Visit(child.clone()));
    }
}

fn render_markdown(html: &str) -> Result<String> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .options(Options {
            heading_style: HeadingStyle::Atx,
            bullet_list_marker: BulletListMarker::Dash,
            ..Default::default()
        })
        .build();

    let markdown = converter
        .convert(html)
        .map_err(|e| ParseError::Markdown(e.to_string()))?;
    debug!(
        "Converted {} bytes of HTML to {} bytes of Markdown",
        html.len(),
        markdown.len()
    );
    Ok(markdown)
}

fn collapse_whitespace(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").into_owned()
}
