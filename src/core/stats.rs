use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::webhook::events::EventKind;

/// Number of batch duration samples retained for the health endpoint.
const DURATION_SAMPLE_CAP: usize = 100;

/// Process-local counters for webhook processing.
///
/// Owned by the dispatcher and updated once per completed batch, a single
/// sequential write after the fan-out joins. In-memory only; not meaningful
/// across multiple processes.
#[derive(Debug, Default)]
pub struct ProcessingStats {
    total_events: u64,
    processed_events: u64,
    failed_events: u64,
    events_by_kind: HashMap<EventKind, u64>,
    batch_durations: Vec<Duration>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_events: u64,
    pub processed_events: u64,
    pub failed_events: u64,
    pub events_by_kind: HashMap<String, u64>,
    pub avg_batch_ms: Option<f64>,
}

impl ProcessingStats {
    /// Record one completed fan-out batch.
    pub fn record_batch(&mut self, results: &[(EventKind, bool)], elapsed: Duration) {
        for (kind, succeeded) in results {
            self.total_events += 1;
            if *succeeded {
                self.processed_events += 1;
            } else {
                self.failed_events += 1;
            }
            *self.events_by_kind.entry(*kind).or_default() += 1;
        }

        if self.batch_durations.len() == DURATION_SAMPLE_CAP {
            self.batch_durations.remove(0);
        }
        self.batch_durations.push(elapsed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let avg_batch_ms = if self.batch_durations.is_empty() {
            None
        } else {
            let total: Duration = self.batch_durations.iter().sum();
            Some(total.as_secs_f64() * 1000.0 / self.batch_durations.len() as f64)
        };

        StatsSnapshot {
            total_events: self.total_events,
            processed_events: self.processed_events,
            failed_events: self.failed_events,
            events_by_kind: self
                .events_by_kind
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), *count))
                .collect(),
            avg_batch_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_tally_splits_success_and_failure() {
        let mut stats = ProcessingStats::default();
        stats.record_batch(
            &[
                (EventKind::Message, true),
                (EventKind::Follow, true),
                (EventKind::Postback, false),
            ],
            Duration::from_millis(10),
        );

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_events, 3);
        assert_eq!(snapshot.processed_events, 2);
        assert_eq!(snapshot.failed_events, 1);
        assert_eq!(snapshot.events_by_kind["message"], 1);
        assert_eq!(snapshot.avg_batch_ms, Some(10.0));
    }

    #[test]
    fn duration_samples_are_capped() {
        let mut stats = ProcessingStats::default();
        for _ in 0..(DURATION_SAMPLE_CAP + 20) {
            stats.record_batch(&[], Duration::from_millis(1));
        }
        assert_eq!(stats.batch_durations.len(), DURATION_SAMPLE_CAP);
    }
}
