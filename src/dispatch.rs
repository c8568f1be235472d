//! Event dispatch: registry lookup plus isolated concurrent fan-out.
//!
//! The registry is built once at startup and never mutated afterwards; the
//! dispatcher owns the stats and is the only writer to them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::core::stats::{ProcessingStats, StatsSnapshot};
use crate::errors::{BotError, Severity};
use crate::webhook::events::{Event, EventKind};

/// A per-event-type handler. Implementations must not assume sibling events
/// in the same batch have run, or will run, in any particular order.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &Event) -> Result<(), BotError>;
}

/// Immutable mapping from event discriminant to handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        self.handlers.insert(kind, handler);
    }

    #[must_use]
    pub fn get(&self, kind: EventKind) -> Option<&Arc<dyn EventHandler>> {
        self.handlers.get(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

enum DispatchStatus {
    Succeeded,
    Failed,
    Skipped,
}

/// Outcome counts for one fan-out batch. Observability only - the HTTP
/// layer acknowledges the webhook no matter what these say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

pub struct Dispatcher {
    registry: HandlerRegistry,
    stats: Mutex<ProcessingStats>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry,
            stats: Mutex::new(ProcessingStats::default()),
        }
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats
            .lock()
            .map(|stats| stats.snapshot())
            .unwrap_or_else(|poisoned| poisoned.into_inner().snapshot())
    }

    /// Process one batch of events from a single webhook delivery.
    ///
    /// Every event is dispatched on its own concurrent task; a failing
    /// handler is caught, severity-classified, and logged without touching
    /// its siblings. Events without a registered handler are skipped at
    /// info level. Stats are tallied once, after the whole batch joins.
    pub async fn process(&self, events: Vec<Event>) -> BatchOutcome {
        let started = Instant::now();
        let results = join_all(events.iter().map(|event| self.dispatch_one(event))).await;

        let mut outcome = BatchOutcome {
            succeeded: 0,
            failed: 0,
            skipped: 0,
        };
        let mut tally = Vec::with_capacity(results.len());
        for (kind, status) in results {
            match status {
                DispatchStatus::Succeeded => {
                    outcome.succeeded += 1;
                    tally.push((kind, true));
                }
                DispatchStatus::Failed => {
                    outcome.failed += 1;
                    tally.push((kind, false));
                }
                DispatchStatus::Skipped => outcome.skipped += 1,
            }
        }

        let elapsed = started.elapsed();
        match self.stats.lock() {
            Ok(mut stats) => stats.record_batch(&tally, elapsed),
            Err(poisoned) => poisoned.into_inner().record_batch(&tally, elapsed),
        }

        info!(
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            skipped = outcome.skipped,
            elapsed_ms = elapsed.as_millis() as u64,
            "batch processed"
        );
        outcome
    }

    async fn dispatch_one(&self, event: &Event) -> (EventKind, DispatchStatus) {
        let kind = event.kind();
        let Some(handler) = self.registry.get(kind) else {
            info!(event_type = kind.as_str(), "no handler registered, skipping");
            return (kind, DispatchStatus::Skipped);
        };

        match handler.handle(event).await {
            Ok(()) => (kind, DispatchStatus::Succeeded),
            Err(e) => {
                match Severity::of(&e) {
                    Severity::Critical => error!(
                        event_type = kind.as_str(),
                        status = e.status(),
                        retryable = e.retryable(),
                        "handler failed: {}",
                        e
                    ),
                    Severity::Standard => warn!(
                        event_type = kind.as_str(),
                        "handler failed: {}",
                        e
                    ),
                }
                (kind, DispatchStatus::Failed)
            }
        }
    }
}
