use email_content::*;
use std::collections::BTreeSet;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_extract_emails() {
    let emails = extract_email_addresses("Contact a@b.com or c@d.org");

    assert_eq!(emails, set(&["a@b.com", "c@d.org"]));
}

#[test]
fn test_extract_emails_deduplicates() {
    let emails = extract_email_addresses("x@y.com, X@Y.COM and x@y.com again");

    assert_eq!(emails, set(&["X@Y.COM", "x@y.com"]));
}

#[test]
fn test_extract_emails_requires_tld() {
    assert!(extract_email_addresses("user@localhost is not matched").is_empty());
    assert!(extract_email_addresses("").is_empty());
}

#[test]
fn test_extract_urls() {
    let urls = extract_urls(
        "See https://example.com/docs?page=1#top and http://test.org:8080/a/b today, \
         or https://example.com/docs?page=1#top again",
    );

    assert_eq!(
        urls,
        set(&["http://test.org:8080/a/b", "https://example.com/docs?page=1#top"])
    );
}

#[test]
fn test_extract_urls_ignores_other_schemes() {
    assert!(extract_urls("ftp://files.example.com and mailto:a@b.com").is_empty());
}

#[test]
fn test_extract_phone_numbers() {
    let phones =
        extract_phone_numbers("Call (555) 123-4567 or +44 20 7946 0958 or 555.987.6543 now");

    assert_eq!(
        phones,
        set(&["(555) 123-4567", "+44 20 7946 0958", "555.987.6543"])
    );
}

#[test]
fn test_extract_phone_numbers_plain_digits() {
    let phones = extract_phone_numbers("Reference 5551234567.");

    assert_eq!(phones, set(&["5551234567"]));
}

#[test]
fn test_extract_dates() {
    let dates =
        extract_dates("Due 12/31/2024, moved to 1-15-25, or Jan 5, 2024 or 5 March 2024 maybe");

    assert_eq!(
        dates,
        set(&["1-15-25", "12/31/2024", "5 March 2024", "Jan 5, 2024"])
    );
}

#[test]
fn test_extract_dates_case_insensitive_month() {
    let dates = extract_dates("on SEPTEMBER 3 2025 and 14 dec 2025");

    assert_eq!(dates, set(&["14 dec 2025", "SEPTEMBER 3 2025"]));
}

#[test]
fn test_extracted_entities_bundle() {
    let entities = ExtractedEntities::extract(
        "Mail a@b.com, visit https://b.com, call 555-123-4567 on 1/2/2025",
    );

    assert_eq!(entities.emails.len(), 1);
    assert_eq!(entities.urls.len(), 1);
    assert_eq!(entities.phone_numbers.len(), 1);
    assert_eq!(entities.dates.len(), 1);
    assert_eq!(entities.total_count(), 4);
    assert!(!entities.is_empty());
}
