//! Conversation orchestrator: one inbound turn, end to end.
//!
//! Every step runs under a single session guard, so concurrent requests for
//! the same session key are serialized:
//! 1. get-or-create the session
//! 2. record the inbound turn
//! 3. classify the text
//! 4. on a scam, pick a rotated reply and record it
//! 5. extract artifacts from the inbound text and merge them
//! 6. return a snapshot

use std::sync::Arc;

use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::detection::ScamClassifier;
use crate::intel;
use crate::replies::{ReplyPolicy, classify_category};
use crate::session::{SessionMemory, SessionStore, Turn};

/// Result of handling one inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub scam_detected: bool,
    pub reply: Option<String>,
    pub session: SessionMemory,
}

/// Wires the classifier, reply policy and extractor to the session store.
pub struct Honeypot {
    store: Arc<SessionStore>,
    classifier: ScamClassifier,
    replies: ReplyPolicy,
}

impl Honeypot {
    /// Honeypot over `store` with the built-in keyword list and reply bank.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            classifier: ScamClassifier::new(),
            replies: ReplyPolicy::default(),
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Handle one inbound message for `session_key`.
    ///
    /// The inbound turn is recorded before anything else can fail; a reply
    /// selection error degrades to `reply: None` instead of aborting.
    pub async fn handle_inbound_message(
        &self,
        session_key: &str,
        sender: &str,
        text: &str,
    ) -> Snapshot {
        let span = info_span!(
            "inbound_message",
            request_id = %Uuid::new_v4(),
            session_id = %session_key,
        );
        self.handle_inner(session_key, sender, text)
            .instrument(span)
            .await
    }

    async fn handle_inner(&self, session_key: &str, sender: &str, text: &str) -> Snapshot {
        let mut session = self.store.lock(session_key).await;

        session.append_turn(Turn::new(sender, text));

        let keywords = self.classifier.matched_keywords(text);
        let scam_detected = !keywords.is_empty();
        let reply = if scam_detected {
            debug!(keywords = ?keywords, "Scam keywords matched");
            let category = classify_category(text);
            match self.replies.select_reply(&mut session, category) {
                Ok(selected) => {
                    session.append_turn(Turn::honeypot(selected.text));
                    info!(
                        category = %selected.category,
                        reply_index = selected.index,
                        "Scam detected, engaging"
                    );
                    Some(selected.text.to_string())
                }
                Err(e) => {
                    warn!(category = %category, error = %e, "Reply selection failed");
                    None
                }
            }
        } else {
            None
        };

        let extracted = intel::extract(text);
        if !extracted.is_empty() {
            info!(artifacts = extracted.total(), "Extracted intelligence");
        }
        session.merge_batch(&extracted);

        info!(
            scam_detected,
            turns = session.session().history.len(),
            "Inbound message handled"
        );

        Snapshot {
            scam_detected,
            reply,
            session: session.snapshot(),
        }
    }
}
