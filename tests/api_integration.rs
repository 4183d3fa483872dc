//! Integration tests for the honeypot HTTP API.
//!
//! Each test spins up an Axum server on a random port and drives the real
//! REST contract with reqwest.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use scam_honeypot::api::{API_KEY_HEADER, ApiState, honeypot_routes};
use scam_honeypot::orchestrator::Honeypot;
use scam_honeypot::replies::{ReplyBank, ReplyCategory};
use scam_honeypot::session::{IntelCategory, SessionStore};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY: &str = "integration-secret";

/// Start an Axum server on a random port, return (base url, store).
async fn start_server() -> (String, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    let state = ApiState {
        honeypot: Arc::new(Honeypot::new(Arc::clone(&store))),
        api_key: SecretString::from(API_KEY.to_string()),
    };
    let app = honeypot_routes(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://127.0.0.1:{port}"), store)
}

fn message(session_id: &str, text: &str) -> Value {
    json!({
        "sessionId": session_id,
        "message": { "sender": "scammer", "text": text }
    })
}

async fn analyze(client: &reqwest::Client, base: &str, body: &Value) -> reqwest::Response {
    client
        .post(format!("{base}/analyze"))
        .header(API_KEY_HEADER, API_KEY)
        .json(body)
        .send()
        .await
        .expect("request failed")
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_key_is_rejected() {
    timeout(TEST_TIMEOUT, async {
        let (base, store) = start_server().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/analyze"))
            .json(&message("s1", "your account is blocked"))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 401);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Invalid API Key");
        assert!(store.is_empty().await);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn wrong_key_with_garbage_body_is_still_unauthorized() {
    timeout(TEST_TIMEOUT, async {
        let (base, store) = start_server().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/analyze"))
            .header(API_KEY_HEADER, "guess")
            .header("content-type", "application/json")
            .body("{{{")
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 401);
        assert!(store.is_empty().await);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn health_is_open() {
    timeout(TEST_TIMEOUT, async {
        let (base, _store) = start_server().await;
        let resp = reqwest::get(format!("{base}/health")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["service"], "scam-honeypot");
    })
    .await
    .expect("test timed out");
}

// ── Conversation flow ───────────────────────────────────────────────

#[tokio::test]
async fn multi_turn_conversation_accumulates_state() {
    timeout(TEST_TIMEOUT, async {
        let (base, store) = start_server().await;
        let client = reqwest::Client::new();

        let first = analyze(
            &client,
            &base,
            &message("conv", "Your account is blocked, share OTP now to prevent fraud"),
        )
        .await;
        assert_eq!(first.status(), 200);
        let first: Value = first.json().await.unwrap();
        let otp_bank = ReplyBank::new().replies(ReplyCategory::Otp);
        assert_eq!(first["status"], "success");
        assert_eq!(first["scamDetected"], true);
        assert_eq!(first["reply"], otp_bank[0]);

        let second: Value = analyze(
            &client,
            &base,
            &message(
                "conv",
                "pay me at rahul.k@upi or visit http://bit.ly/x, call +91-9876543210, account 123456789012",
            ),
        )
        .await
        .json()
        .await
        .unwrap();

        let memory = &second["sessionMemory"];
        assert_eq!(memory["history"].as_array().unwrap().len(), 4);
        assert_eq!(memory["history"][1]["sender"], "honeypot");
        assert_eq!(memory["intelligence"]["upiIds"], json!(["rahul.k@upi"]));
        assert_eq!(memory["intelligence"]["phishingLinks"], json!(["http://bit.ly/x"]));
        assert_eq!(memory["intelligence"]["phoneNumbers"], json!(["+91-9876543210"]));
        assert_eq!(memory["intelligence"]["accountNumbers"], json!(["123456789012"]));

        let third: Value = analyze(&client, &base, &message("conv", "share otp again"))
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(third["reply"], otp_bank[1]);

        let session = store.get_or_create("conv").await;
        assert_eq!(session.history.len(), 6);
        assert_eq!(session.intelligence.get(IntelCategory::PaymentHandle).len(), 1);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn empty_text_is_accepted() {
    timeout(TEST_TIMEOUT, async {
        let (base, _store) = start_server().await;
        let client = reqwest::Client::new();
        let body: Value = analyze(&client, &base, &message("quiet", ""))
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(body["scamDetected"], false);
        assert!(body["reply"].is_null());
        assert_eq!(body["sessionMemory"]["history"][0]["text"], "");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    timeout(TEST_TIMEOUT, async {
        let (base, store) = start_server().await;
        let client = reqwest::Client::new();
        let resp = analyze(&client, &base, &json!({ "sessionId": "s1" })).await;
        assert_eq!(resp.status(), 422);
        assert!(store.is_empty().await);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn concurrent_requests_on_one_session_stay_consistent() {
    timeout(TEST_TIMEOUT, async {
        let (base, store) = start_server().await;
        let client = reqwest::Client::new();
        let n = 25;

        let requests = (0..n).map(|_| {
            let client = client.clone();
            let base = base.clone();
            async move {
                let resp = analyze(&client, &base, &message("busy", "account suspended")).await;
                let body: Value = resp.json().await.unwrap();
                body["reply"].as_str().unwrap().to_string()
            }
        });
        let mut replies = join_all(requests).await;

        let bank = ReplyBank::new().replies(ReplyCategory::Threat);
        let mut expected: Vec<String> = (0..n).map(|i| bank[i % bank.len()].to_string()).collect();
        replies.sort();
        expected.sort();
        assert_eq!(replies, expected);

        let session = store.get_or_create("busy").await;
        assert_eq!(session.history.len(), 2 * n);
        assert_eq!(session.cursor(ReplyCategory::Threat), n as u64);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn sessions_are_isolated() {
    timeout(TEST_TIMEOUT, async {
        let (base, _store) = start_server().await;
        let client = reqwest::Client::new();

        analyze(&client, &base, &message("a", "pay scam@upi")).await;
        let b: Value = analyze(&client, &base, &message("b", "hello"))
            .await
            .json()
            .await
            .unwrap();

        assert_eq!(b["sessionMemory"]["history"].as_array().unwrap().len(), 1);
        assert_eq!(b["sessionMemory"]["intelligence"]["upiIds"], json!([]));
    })
    .await
    .expect("test timed out");
}
