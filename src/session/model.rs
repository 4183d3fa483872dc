//! Session data model: transcript turns, intelligence log, rotation cursors.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::replies::ReplyCategory;

/// Sender label used for turns generated by the honeypot itself.
pub const HONEYPOT_SENDER: &str = "honeypot";

/// One message exchanged within a session. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub sender: String,
    pub text: String,
}

impl Turn {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// A turn authored by the honeypot.
    pub fn honeypot(text: impl Into<String>) -> Self {
        Self::new(HONEYPOT_SENDER, text)
    }
}

/// Kind of artifact pulled out of scammer messages.
///
/// Serialized names keep the wire vocabulary clients already consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntelCategory {
    #[serde(rename = "upiIds")]
    PaymentHandle,
    #[serde(rename = "phishingLinks")]
    Link,
    #[serde(rename = "phoneNumbers")]
    PhoneNumber,
    #[serde(rename = "accountNumbers")]
    AccountNumber,
}

impl IntelCategory {
    pub const ALL: [IntelCategory; 4] = [
        Self::PaymentHandle,
        Self::Link,
        Self::PhoneNumber,
        Self::AccountNumber,
    ];
}

impl std::fmt::Display for IntelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PaymentHandle => "payment_handle",
            Self::Link => "link",
            Self::PhoneNumber => "phone_number",
            Self::AccountNumber => "account_number",
        };
        write!(f, "{s}")
    }
}

/// Append-only log of extracted artifacts, keyed by category.
///
/// Not a set: a value that reappears in a later turn
/// is appended again. Every category is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntelligenceLog {
    entries: BTreeMap<IntelCategory, Vec<String>>,
}

impl Default for IntelligenceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl IntelligenceLog {
    pub fn new() -> Self {
        Self {
            entries: IntelCategory::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    /// Append `values` to `category`, preserving their order.
    pub fn append<I>(&mut self, category: IntelCategory, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.entry(category).or_default().extend(values);
    }

    /// Append every category of `other` onto this log.
    pub fn extend_from(&mut self, other: &IntelligenceLog) {
        for (category, values) in other.iter() {
            if !values.is_empty() {
                self.append(category, values.iter().cloned());
            }
        }
    }

    pub fn get(&self, category: IntelCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntelCategory, &[String])> {
        self.entries.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Total number of artifacts across all categories.
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One ongoing conversation with a single counterparty.
#[derive(Debug, Clone)]
pub struct Session {
    pub key: String,
    pub history: Vec<Turn>,
    pub intelligence: IntelligenceLog,
    pub rotation_cursors: BTreeMap<ReplyCategory, u64>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    /// Empty session: no history, empty intelligence, zero cursors.
    pub fn new(key: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            history: Vec::new(),
            intelligence: IntelligenceLog::new(),
            rotation_cursors: ReplyCategory::ALL.iter().map(|c| (*c, 0)).collect(),
            created_at: now,
            last_seen: now,
        }
    }

    pub fn cursor(&self, category: ReplyCategory) -> u64 {
        self.rotation_cursors.get(&category).copied().unwrap_or(0)
    }

    /// Wire-facing view of the session.
    pub fn memory(&self) -> SessionMemory {
        SessionMemory {
            history: self.history.clone(),
            intelligence: self.intelligence.clone(),
        }
    }
}

/// Transcript and intelligence, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMemory {
    pub history: Vec<Turn>,
    pub intelligence: IntelligenceLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty_with_zero_cursors() {
        let session = Session::new("abc");
        assert!(session.history.is_empty());
        for category in IntelCategory::ALL {
            assert!(session.intelligence.get(category).is_empty());
        }
        for category in ReplyCategory::ALL {
            assert_eq!(session.cursor(category), 0);
        }
    }

    #[test]
    fn intelligence_log_keeps_duplicates() {
        let mut log = IntelligenceLog::new();
        log.append(IntelCategory::PaymentHandle, vec!["a@upi".to_string()]);
        log.append(IntelCategory::PaymentHandle, vec!["a@upi".to_string()]);
        assert_eq!(log.get(IntelCategory::PaymentHandle), ["a@upi", "a@upi"]);
        assert_eq!(log.total(), 2);
    }

    #[test]
    fn extend_from_preserves_order() {
        let mut base = IntelligenceLog::new();
        base.append(IntelCategory::Link, vec!["http://one".to_string()]);

        let mut batch = IntelligenceLog::new();
        batch.append(
            IntelCategory::Link,
            vec!["http://two".to_string(), "http://three".to_string()],
        );
        base.extend_from(&batch);

        assert_eq!(
            base.get(IntelCategory::Link),
            ["http://one", "http://two", "http://three"]
        );
    }

    #[test]
    fn empty_log_serializes_every_category() {
        let json = serde_json::to_value(IntelligenceLog::new()).unwrap();
        for key in ["upiIds", "phishingLinks", "phoneNumbers", "accountNumbers"] {
            assert_eq!(json[key], serde_json::json!([]), "missing {key}");
        }
    }

    #[test]
    fn honeypot_turn_sender() {
        assert_eq!(Turn::honeypot("hi").sender, "honeypot");
    }
}
