//! Integration tests for the session read counter.

use feedsim::config::Config;
use feedsim::session::NewsSession;
use futures::StreamExt;
use std::time::Duration;

fn session() -> NewsSession {
    NewsSession::new(&Config::default()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_single_mark_read_after_delay() {
    let session = session();
    session.mark_read();

    tokio::time::sleep(Duration::from_millis(299)).await;
    assert_eq!(session.read_count(), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(session.read_count(), 1);
    assert_eq!(session.pending_reads(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_mark_reads_are_all_counted() {
    let session = session();
    for _ in 0..25 {
        session.mark_read();
    }
    assert_eq!(session.pending_reads(), 25);

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(session.read_count(), 25);
    assert_eq!(session.pending_reads(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_observer_gets_current_value_then_updates() {
    let session = session();
    session.mark_read();
    tokio::time::sleep(Duration::from_millis(400)).await;

    let mut counts = session.observe_read_count();
    assert_eq!(counts.next().await, Some(1));

    session.mark_read();
    assert_eq!(counts.next().await, Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_every_observer_converges_on_final_count() {
    let session = session();
    let mut a = session.observe_read_count();
    let mut b = session.observe_read_count();

    for _ in 0..5 {
        session.mark_read();
    }
    tokio::time::sleep(Duration::from_millis(400)).await;

    // Watch semantics: intermediate values may be skipped, the latest never is.
    assert_eq!(a.next().await, Some(5));
    assert_eq!(b.next().await, Some(5));
}

#[tokio::test(start_paused = true)]
async fn test_counter_is_unaffected_by_feed_changes() {
    let session = session();
    let feed = session.subscribe_feed("Tech").unwrap();
    session.mark_read();
    drop(feed);

    let _feed = session.subscribe_feed("Health").unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(session.read_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sessions_do_not_share_counts() {
    let a = session();
    let b = session();
    a.mark_read();
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(a.read_count(), 1);
    assert_eq!(b.read_count(), 0);
}
