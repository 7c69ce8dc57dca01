//! Unit tests for trellis-session

use crate::{CollabHub, Document, TextUpdate};
use trellis_layout::LayoutConfig;

const GOOD: &str = "def greet(name):\n    pass\n\nclass Person:\n    pass\n";
const ALSO_GOOD: &str = "def farewell():\n    pass\n";
const BROKEN: &str = "def broken(\n";

#[test]
fn test_document_starts_empty() {
    let document = Document::new();
    assert!(document.snapshot().is_none());
}

#[test]
fn test_apply_text_builds_snapshot() {
    let mut document = Document::new();
    let config = LayoutConfig::default();

    let snapshot = document.apply_text(GOOD, &config).unwrap();
    assert_eq!(snapshot.graph.node_count(), 2);
    assert_eq!(snapshot.positions.len(), 2);
    assert_eq!(snapshot.source, GOOD);
}

#[test]
fn test_parse_failure_keeps_last_good_state() {
    let mut document = Document::new();
    let config = LayoutConfig::default();

    document.apply_text(GOOD, &config).unwrap();
    let err = document.apply_text(BROKEN, &config);
    assert!(err.is_err());

    // Visualization stays on the last good state.
    let snapshot = document.snapshot().unwrap();
    assert_eq!(snapshot.source, GOOD);
    assert_eq!(snapshot.graph.node_count(), 2);
    assert!(snapshot.graph.contains("greet"));
    assert_eq!(snapshot.positions.len(), 2);
}

#[test]
fn test_parse_failure_with_no_prior_state() {
    let mut document = Document::new();
    assert!(document.apply_text(BROKEN, &LayoutConfig::default()).is_err());
    assert!(document.snapshot().is_none());
}

#[test]
fn test_successful_reapply_replaces_snapshot() {
    let mut document = Document::new();
    let config = LayoutConfig::default();

    document.apply_text(GOOD, &config).unwrap();
    document.apply_text(ALSO_GOOD, &config).unwrap();

    let snapshot = document.snapshot().unwrap();
    assert_eq!(snapshot.source, ALSO_GOOD);
    assert!(snapshot.graph.contains("farewell"));
    assert!(!snapshot.graph.contains("greet"));
}

#[tokio::test]
async fn test_hub_relays_to_other_peers() {
    let hub = CollabHub::new(16);
    let mut alice = hub.join("alice");
    let mut bob = hub.join("bob");

    hub.publish(TextUpdate {
        sender: "alice".to_string(),
        text: GOOD.to_string(),
    });

    let received = bob.recv().await.unwrap();
    assert_eq!(received.sender, "alice");
    assert_eq!(received.text, GOOD);

    hub.publish(TextUpdate {
        sender: "bob".to_string(),
        text: ALSO_GOOD.to_string(),
    });

    // Alice skips her own earlier update and sees Bob's.
    let received = alice.recv().await.unwrap();
    assert_eq!(received.sender, "bob");
}

#[tokio::test]
async fn test_hub_publish_without_peers() {
    let hub = CollabHub::new(4);
    let reached = hub.publish(TextUpdate {
        sender: "alice".to_string(),
        text: String::new(),
    });
    assert_eq!(reached, 0);
}

#[tokio::test]
async fn test_peer_identity() {
    let hub = CollabHub::new(4);
    let peer = hub.join("carol");
    assert_eq!(peer.id(), "carol");
}
