//! Usage-counter telemetry
//!
//! The host may supply a counter sink; deprecated routes record one event per
//! handled request through [`track_deprecated_route_usage`].

use std::sync::Arc;

use dashmap::DashMap;

/// Counter event recorded by the summary route.
pub const INSTANCE_SUMMARY_COUNTER: &str = "instanceSummary";

/// Telemetry sink that increments a named event count.
pub trait UsageCounter: Send + Sync {
    fn increment_counter(&self, counter_name: &str);
}

/// Record one usage event for a deprecated route, when a counter was supplied.
pub fn track_deprecated_route_usage(
    counter_name: &str,
    usage_counter: Option<&Arc<dyn UsageCounter>>,
) {
    if let Some(counter) = usage_counter {
        counter.increment_counter(counter_name);
    }
}

/// In-memory counter, readable for tests and the status surface.
#[derive(Default)]
pub struct InMemoryUsageCounter {
    counts: DashMap<String, u64>,
}

impl InMemoryUsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, counter_name: &str) -> u64 {
        self.counts.get(counter_name).map(|c| *c).unwrap_or(0)
    }
}

impl UsageCounter for InMemoryUsageCounter {
    fn increment_counter(&self, counter_name: &str) {
        *self.counts.entry(counter_name.to_string()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_increments_supplied_counter_once() {
        let counter = Arc::new(InMemoryUsageCounter::new());
        let sink: Arc<dyn UsageCounter> = counter.clone();

        track_deprecated_route_usage(INSTANCE_SUMMARY_COUNTER, Some(&sink));
        assert_eq!(counter.count(INSTANCE_SUMMARY_COUNTER), 1);

        track_deprecated_route_usage(INSTANCE_SUMMARY_COUNTER, Some(&sink));
        assert_eq!(counter.count(INSTANCE_SUMMARY_COUNTER), 2);
    }

    #[test]
    fn tracking_without_counter_is_a_no_op() {
        track_deprecated_route_usage(INSTANCE_SUMMARY_COUNTER, None);
    }

    #[test]
    fn unknown_counter_reads_zero() {
        let counter = InMemoryUsageCounter::new();
        assert_eq!(counter.count("never"), 0);
    }
}
