//! Reply category rules and rotated reply selection.
//!
//! Categories are picked by a priority-ordered rule list, first match wins.
//! Within a category, replies are served in bank order using the session's
//! rotation cursor, wrapping once the list is exhausted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bank::ReplyBank;
use crate::error::SessionError;
use crate::session::SessionGuard;

/// Bucket used to pick which canned-reply list to rotate through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    Otp,
    Threat,
    AccountNumber,
    Fraud,
    Generic,
}

impl ReplyCategory {
    /// Every category, in rule priority order.
    pub const ALL: [ReplyCategory; 5] = [
        Self::Otp,
        Self::Threat,
        Self::AccountNumber,
        Self::Fraud,
        Self::Generic,
    ];
}

impl std::fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Otp => "otp",
            Self::Threat => "threat",
            Self::AccountNumber => "account_number",
            Self::Fraud => "fraud",
            Self::Generic => "generic",
        };
        write!(f, "{s}")
    }
}

/// A single (needles, category) rule. Fires when the lower-cased message
/// contains any needle as a substring.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub needles: &'static [&'static str],
    pub category: ReplyCategory,
}

impl CategoryRule {
    fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|n| lowered.contains(n))
    }
}

/// Rules in priority order. Anything unmatched falls through to `Generic`.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        needles: &["otp", "pin"],
        category: ReplyCategory::Otp,
    },
    CategoryRule {
        needles: &["blocked", "locked", "suspended"],
        category: ReplyCategory::Threat,
    },
    CategoryRule {
        needles: &["account number"],
        category: ReplyCategory::AccountNumber,
    },
    CategoryRule {
        needles: &["fraud", "security", "breach"],
        category: ReplyCategory::Fraud,
    },
];

/// Classify a message into a reply category using [`CATEGORY_RULES`].
pub fn classify_category(text: &str) -> ReplyCategory {
    classify_with(CATEGORY_RULES, text)
}

/// Classify against an arbitrary rule list (first match wins).
fn classify_with(rules: &[CategoryRule], text: &str) -> ReplyCategory {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(ReplyCategory::Generic)
}

/// Selected reply plus the bank index it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedReply {
    pub category: ReplyCategory,
    pub index: usize,
    pub text: &'static str,
}

/// Rotation policy over a [`ReplyBank`].
#[derive(Debug, Clone, Default)]
pub struct ReplyPolicy {
    bank: ReplyBank,
}

impl ReplyPolicy {
    pub fn bank(&self) -> &ReplyBank {
        &self.bank
    }

    /// Pick the next reply for `category` in the locked session, advancing
    /// its rotation cursor.
    pub fn select_reply(
        &self,
        session: &mut SessionGuard,
        category: ReplyCategory,
    ) -> Result<SelectedReply, SessionError> {
        let replies = self.bank.replies(category);
        let index = session.next_rotation_index(category, replies.len())?;
        debug!(
            session_id = %session.key(),
            category = %category,
            reply_index = index,
            "Selected rotated reply"
        );
        Ok(SelectedReply {
            category,
            index,
            text: replies[index],
        })
    }
}
