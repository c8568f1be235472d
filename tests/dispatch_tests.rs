use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use linebridge::dispatch::{BatchOutcome, Dispatcher, EventHandler, HandlerRegistry};
use linebridge::errors::BotError;
use linebridge::webhook::events::{Event, EventKind, Source};

struct CountingHandler {
    calls: AtomicUsize,
}

#[async_trait]
impl EventHandler for CountingHandler {
    async fn handle(&self, _event: &Event) -> Result<(), BotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    async fn handle(&self, _event: &Event) -> Result<(), BotError> {
        Err(BotError::ApiError {
            status: 429,
            message: "rate limit exceeded".to_string(),
        })
    }
}

fn user_source(id: &str) -> Source {
    Source::User {
        user_id: id.to_string(),
    }
}

fn follow_event(n: usize) -> Event {
    Event::Follow {
        reply_token: format!("token-{n}"),
        source: user_source(&format!("U{n}")),
    }
}

fn join_event() -> Event {
    Event::Join {
        reply_token: "join-token".to_string(),
        source: Source::Group {
            group_id: "G1".to_string(),
            user_id: None,
        },
    }
}

#[tokio::test]
async fn one_failing_handler_does_not_sink_its_siblings() {
    let mut registry = HandlerRegistry::new();
    let counting = Arc::new(CountingHandler {
        calls: AtomicUsize::new(0),
    });
    registry.register(EventKind::Follow, counting.clone());
    registry.register(EventKind::Join, Arc::new(FailingHandler));

    let dispatcher = Dispatcher::new(registry);
    let events = vec![follow_event(1), join_event(), follow_event(2), follow_event(3)];
    let outcome = dispatcher.process(events).await;

    assert_eq!(
        outcome,
        BatchOutcome {
            succeeded: 3,
            failed: 1,
            skipped: 0,
        }
    );
    assert_eq!(counting.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn events_without_a_registered_handler_are_skipped() {
    let mut registry = HandlerRegistry::new();
    registry.register(
        EventKind::Follow,
        Arc::new(CountingHandler {
            calls: AtomicUsize::new(0),
        }),
    );

    let dispatcher = Dispatcher::new(registry);
    let outcome = dispatcher.process(vec![follow_event(1), join_event()]).await;

    assert_eq!(outcome.succeeded, 1);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let dispatcher = Dispatcher::new(HandlerRegistry::new());
    let outcome = dispatcher.process(Vec::new()).await;

    assert_eq!(outcome.succeeded, 0);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.skipped, 0);
}

#[tokio::test]
async fn stats_accumulate_across_batches_and_exclude_skips() {
    let mut registry = HandlerRegistry::new();
    registry.register(
        EventKind::Follow,
        Arc::new(CountingHandler {
            calls: AtomicUsize::new(0),
        }),
    );
    registry.register(EventKind::Join, Arc::new(FailingHandler));

    let dispatcher = Dispatcher::new(registry);
    dispatcher.process(vec![follow_event(1), join_event()]).await;
    dispatcher
        .process(vec![
            follow_event(2),
            // No Leave handler is registered; skips stay out of the totals.
            Event::Leave {
                source: user_source("U9"),
            },
        ])
        .await;

    let snapshot = dispatcher.stats_snapshot();
    assert_eq!(snapshot.total_events, 3);
    assert_eq!(snapshot.processed_events, 2);
    assert_eq!(snapshot.failed_events, 1);
    assert_eq!(snapshot.events_by_kind["follow"], 2);
    assert_eq!(snapshot.events_by_kind["join"], 1);
    assert!(!snapshot.events_by_kind.contains_key("leave"));
    assert!(snapshot.avg_batch_ms.is_some());
}
