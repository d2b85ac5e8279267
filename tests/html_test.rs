use email_content::*;

#[test]
fn test_clean_html_strips_script() {
    assert_eq!(
        clean_html("<script>evil()</script><p>Hello <b>World</b></p>"),
        "Hello World"
    );
}

#[test]
fn test_clean_html_drops_invisible_elements() {
    let html = "<html><head><title>Title</title><meta charset=\"utf-8\">\
                <link rel=\"stylesheet\" href=\"a.css\"></head>\
                <body><style>.x { color: red; }</style><p>Visible</p></body></html>";

    assert_eq!(clean_html(html), "Visible");
}

#[test]
fn test_clean_html_joins_lines() {
    let html = "<p>First paragraph</p><p>Second   paragraph</p>";
    let text = clean_html(html);

    assert!(!text.contains('\n'));
    assert!(text.starts_with("First paragraph"));
    assert!(text.ends_with("paragraph"));
    assert!(!text.contains("  "));
}

#[test]
fn test_clean_html_decodes_entities() {
    assert_eq!(clean_html("<p>Fish &amp; chips</p>"), "Fish & chips");
}

#[test]
fn test_clean_html_empty() {
    assert_eq!(clean_html(""), "");
}

#[test]
fn test_clean_html_plain_text_passthrough() {
    assert_eq!(clean_html("just text"), "just text");
}

#[test]
fn test_html_to_markdown_headings_and_bullets() {
    let markdown = html_to_markdown("<h1>Title</h1><ul><li>One</li><li>Two</li></ul>");

    assert!(markdown.starts_with("# Title"));
    assert!(markdown.contains("- One"));
    assert!(markdown.contains("- Two"));
}

#[test]
fn test_html_to_markdown_skips_script_and_style() {
    let markdown =
        html_to_markdown("<style>p { margin: 0 }</style><script>evil()</script><p>Hi</p>");

    assert_eq!(markdown, "Hi");
}

#[test]
fn test_html_to_markdown_collapses_blank_runs() {
    let markdown = html_to_markdown("<p>A</p><br><br><br><br><p>B</p>");

    assert!(!markdown.contains("\n\n\n"));
    assert!(markdown.starts_with('A'));
    assert!(markdown.ends_with('B'));
}

#[test]
fn test_html_to_markdown_empty() {
    assert_eq!(html_to_markdown(""), "");
}

#[test]
fn test_malformed_markup_never_panics() {
    let inputs = [
        "<p>unclosed",
        "<<>>",
        "</div></div></span>",
        "<scr<script>ipt>alert(1)</script>",
        "<a href=\"unterminated>link",
        "<b><i>misnested</b></i>",
        "<!-- open comment",
        "<![CDATA[ raw ]]>",
        "\u{0}\u{1}\u{7f}<b",
        "\u{fffd}\u{fffd}<p>\u{fffd}</p>",
    ];

    for input in inputs {
        let _ = clean_html(input);
        let _ = html_to_markdown(input);
    }

    let garbage = String::from_utf8_lossy(&[0xff, 0x3c, 0xfe, 0x3e, 0x00, 0x80]).into_owned();
    let _ = clean_html(&garbage);
    let _ = html_to_markdown(&garbage);
}

#[test]
fn test_unclosed_elements_keep_text() {
    assert!(clean_html("<div><p>kept text").contains("kept text"));
    assert!(html_to_markdown("<div><p>kept text").contains("kept text"));
}

#[test]
fn test_clean_html_table_has_no_borders() {
    let html = "<table><tr><td>Name</td><td>Alice</td></tr>\
                <tr><td>Role</td><td>CEO</td></tr></table>";

    assert_eq!(clean_html(html), "Name Alice Role CEO");
}

#[test]
fn test_clean_html_list_has_no_bullets() {
    assert_eq!(clean_html("<ul><li>One</li><li>Two</li></ul>"), "One Two");
}

#[test]
fn test_clean_html_blockquote_has_no_marker() {
    assert_eq!(clean_html("<blockquote>old</blockquote>"), "old");
}

#[test]
fn test_clean_html_heading_has_no_marker() {
    assert_eq!(clean_html("<h1>Title</h1><p>a</p>"), "Title a");
}

#[test]
fn test_clean_html_link_keeps_text_only() {
    assert_eq!(
        clean_html("see <a href=\"https://example.com\">link</a>"),
        "see link"
    );
}

#[test]
fn test_clean_html_image_alt_is_not_text() {
    assert_eq!(clean_html("<p>Hi <img alt=\"Logo\" src=\"logo.png\"></p>"), "Hi");
}
