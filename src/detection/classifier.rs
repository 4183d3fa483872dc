//! Keyword-based scam classifier.
//!
//! Case-insensitive substring match against a fixed keyword list. Matching is
//! intentionally low precision: "pin" fires inside "shopping". The honeypot
//! would rather over-trigger than miss an attempt.

use std::sync::LazyLock;

/// Keywords that mark a message as a scam attempt.
pub const SCAM_KEYWORDS: &[&str] = &[
    "account",
    "blocked",
    "locked",
    "urgent",
    "immediately",
    "verify",
    "bank",
    "upi",
    "click",
    "link",
    "otp",
    "pin",
    "fraud",
    "security",
    "breach",
    "suspended",
    "account number",
    "send money",
    "transfer",
];

/// Pure predicate over message text.
#[derive(Debug, Clone)]
pub struct ScamClassifier {
    keywords: Vec<String>,
}

impl Default for ScamClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ScamClassifier {
    /// Classifier over [`SCAM_KEYWORDS`].
    pub fn new() -> Self {
        Self::with_keywords(SCAM_KEYWORDS.iter().copied())
    }

    /// Classifier over a custom keyword list (lower-cased on construction).
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn is_scam(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Every keyword present in `text`, in keyword-list order.
    pub fn matched_keywords(&self, text: &str) -> Vec<&str> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }
}

static DEFAULT_CLASSIFIER: LazyLock<ScamClassifier> = LazyLock::new(ScamClassifier::new);

/// [`ScamClassifier::is_scam`] with the default keyword list.
pub fn is_scam(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_scam(text)
}
