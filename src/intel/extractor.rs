//! Pattern extractor for scammer-revealed artifacts.
//!
//! Stateless: every call scans the text once per category and returns all
//! matches in order of appearance.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::session::{IntelCategory, IntelligenceLog};

static PAYMENT_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.-]+@upi\b").expect("payment handle regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("link regex"));

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+91-\d{10}\b").expect("phone number regex"));

static ACCOUNT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{9,18}\b").expect("account number regex"));

/// Sentence punctuation that trails a link in prose rather than belonging to it.
const LINK_TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', ')', '"', '\''];

/// Extract every artifact in `text`, grouped by category.
///
/// Categories with no matches are present and empty.
pub fn extract(text: &str) -> IntelligenceLog {
    let mut log = IntelligenceLog::new();

    log.append(
        IntelCategory::PaymentHandle,
        PAYMENT_HANDLE
            .find_iter(text)
            .map(|m| m.as_str().to_string()),
    );

    log.append(
        IntelCategory::Link,
        LINK.find_iter(text)
            .map(|m| m.as_str().trim_end_matches(LINK_TRAILING_PUNCTUATION))
            .filter(|link| !link.ends_with("://"))
            .map(str::to_string),
    );

    let phone_spans: Vec<Range<usize>> = PHONE_NUMBER.find_iter(text).map(|m| m.range()).collect();
    log.append(
        IntelCategory::PhoneNumber,
        phone_spans.iter().map(|r| text[r.clone()].to_string()),
    );

    // Digits inside a phone number are not a separate account number.
    log.append(
        IntelCategory::AccountNumber,
        ACCOUNT_NUMBER
            .find_iter(text)
            .filter(|m| !phone_spans.iter().any(|p| overlaps(p, &m.range())))
            .map(|m| m.as_str().to_string()),
    );

    log
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
