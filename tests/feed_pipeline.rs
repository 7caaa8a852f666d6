//! Integration tests for the headline pipeline: generate, filter, format, cancel.
//!
//! Every test runs on a paused tokio clock, so the 2 s emission interval costs
//! nothing and item timing is exact.

use feedsim::config::Config;
use feedsim::feed::{CyclingPicker, FeedError, FeedItem};
use feedsim::session::NewsSession;
use futures::{Stream, StreamExt};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::sync::mpsc;

fn seeded_session(seed: u64) -> NewsSession {
    NewsSession::new(&Config {
        seed: Some(seed),
        ..Config::default()
    })
    .unwrap()
}

/// Drain `stream` until `window` of (virtual) time has passed.
async fn collect_for<S>(stream: &mut S, window: Duration) -> Vec<S::Item>
where
    S: Stream + Unpin,
{
    let mut out = Vec::new();
    let _ = tokio::time::timeout(window, async {
        while let Some(value) = stream.next().await {
            out.push(value);
        }
    })
    .await;
    out
}

fn headline(selector: &str, item: &FeedItem) -> String {
    format!("[{}] {} - Just published!", selector, item.title)
}

// ============================================================================
// Filtering
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_sport_subset_of_first_three_items() {
    let session = seeded_session(42);

    // Same seed, same category sequence: the unfiltered run is the reference.
    let mut items = session.subscribe_items();
    let reference = collect_for(&mut items, Duration::from_millis(4100)).await;
    assert_eq!(
        reference.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let mut feed = session.subscribe_feed("Sport").unwrap();
    let lines = collect_for(&mut feed, Duration::from_millis(4100)).await;

    let expected: Vec<String> = reference
        .iter()
        .filter(|item| item.category == "Sport")
        .map(|item| headline("Sport", item))
        .collect();
    assert_eq!(lines, expected);
}

#[tokio::test(start_paused = true)]
async fn test_sport_with_cycling_picker_is_every_third_item() {
    let session = NewsSession::new(&Config::default())
        .unwrap()
        .with_picker(|| Box::new(CyclingPicker::default()));

    // Tech, Health, Sport, Tech, Health, Sport, ...
    let mut feed = session.subscribe_feed("Sport").unwrap();
    let lines = collect_for(&mut feed, Duration::from_millis(12_100)).await;

    assert_eq!(
        lines,
        vec![
            "[Sport] Item #3 - Just published!".to_string(),
            "[Sport] Item #6 - Just published!".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_wildcard_passes_every_item() {
    let session = seeded_session(7);

    let mut items = session.subscribe_items();
    let reference = collect_for(&mut items, Duration::from_millis(10_100)).await;
    assert_eq!(reference.len(), 6);

    let mut feed = session.subscribe_feed("All").unwrap();
    let lines = collect_for(&mut feed, Duration::from_millis(10_100)).await;

    let expected: Vec<String> = reference.iter().map(|i| headline("All", i)).collect();
    assert_eq!(lines, expected);
}

#[tokio::test(start_paused = true)]
async fn test_custom_suffix_is_used() {
    let session = NewsSession::new(&Config {
        freshness_suffix: "Fresh!".into(),
        ..Config::default()
    })
    .unwrap();

    let mut feed = session.subscribe_feed("All").unwrap();
    assert_eq!(feed.next().await.unwrap(), "[All] Item #1 - Fresh!");
}

#[tokio::test]
async fn test_unknown_selector_is_rejected() {
    let session = NewsSession::new(&Config::default()).unwrap();

    match session.subscribe_feed("Weather") {
        Err(FeedError::UnknownCategory { selector, options }) => {
            assert_eq!(selector, "Weather");
            assert_eq!(options, vec!["All", "Tech", "Health", "Sport"]);
        }
        other => panic!("expected UnknownCategory, got {:?}", other),
    }
}

// ============================================================================
// Subscription lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_subscriptions_are_independent() {
    let session = NewsSession::new(&Config::default()).unwrap();

    let mut first = session.subscribe_items();
    let early = collect_for(&mut first, Duration::from_millis(4100)).await;
    assert_eq!(early.len(), 3);

    // A later subscriber starts its own sequence from id 1.
    let mut second = session.subscribe_items();
    assert_eq!(second.next().await.unwrap().id, 1);
    assert_eq!(first.next().await.unwrap().id, 4);
}

#[tokio::test(start_paused = true)]
async fn test_seeded_sessions_replay_categories() {
    let a = seeded_session(99);
    let b = seeded_session(99);

    let mut items_a = a.subscribe_items();
    let mut items_b = b.subscribe_items();
    let seq_a = collect_for(&mut items_a, Duration::from_millis(20_100)).await;
    let seq_b = collect_for(&mut items_b, Duration::from_millis(20_100)).await;

    assert_eq!(seq_a.len(), 11);
    assert_eq!(seq_a, seq_b);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_subscription_stops_emission() {
    let session = NewsSession::new(&Config::default()).unwrap();
    let mut feed = session.subscribe_feed("All").unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let forwarder = tokio::spawn(async move {
        while let Some(line) = feed.next().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    tokio::time::sleep(Duration::from_millis(2100)).await;
    forwarder.abort();
    tokio::time::sleep(Duration::from_secs(30)).await;

    let mut received = Vec::new();
    while let Some(line) = rx.recv().await {
        received.push(line);
    }
    assert_eq!(
        received,
        vec![
            "[All] Item #1 - Just published!".to_string(),
            "[All] Item #2 - Just published!".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_resubscribe_restarts_numbering() {
    let session = NewsSession::new(&Config::default())
        .unwrap()
        .with_picker(|| Box::new(CyclingPicker::default()));

    let mut feed = session.subscribe_feed("All").unwrap();
    let before = collect_for(&mut feed, Duration::from_millis(2100)).await;
    assert_eq!(before.len(), 2);
    drop(feed);

    let mut feed = session.subscribe_feed("Tech").unwrap();
    assert_eq!(feed.next().await.unwrap(), "[Tech] Item #1 - Just published!");
}
