//! Counters for contact list fetches and searches.
//!
//! A `Metrics` handle is cheap to clone; every clone feeds the same counters,
//! so the client and the search service can share one collector and the
//! totals are logged once at shutdown.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    fetches: AtomicU64,
    fetch_failures: AtomicU64,
    fetch_millis: AtomicU64,
    contacts_fetched: AtomicU64,
    searches: AtomicU64,
    results_matched: AtomicU64,
}

/// Shared metrics collector.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed GET of the contact list.
    pub fn record_http_request(&self, duration: Duration) {
        let c = &self.counters;
        c.fetches.fetch_add(1, Ordering::Relaxed);
        c.fetch_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.counters.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contacts_fetched(&self, count: usize) {
        self.counters
            .contacts_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a search and how many contacts it matched.
    pub fn record_search(&self, matched: usize) {
        let c = &self.counters;
        c.searches.fetch_add(1, Ordering::Relaxed);
        c.results_matched.fetch_add(matched as u64, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.fetches.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.counters.fetch_failures.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.counters.fetch_millis.load(Ordering::Relaxed)
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.counters.contacts_fetched.load(Ordering::Relaxed)
    }

    pub fn searches_total(&self) -> u64 {
        self.counters.searches.load(Ordering::Relaxed)
    }

    pub fn results_matched_total(&self) -> u64 {
        self.counters.results_matched.load(Ordering::Relaxed)
    }

    /// Snapshot of every counter.
    pub fn summary(&self) -> MetricsSummary {
        let requests = self.http_requests_total();
        let searches = self.searches_total();
        MetricsSummary {
            searches,
            avg_matches: ratio(self.results_matched_total(), searches),
            http_requests: requests,
            http_errors: self.http_errors_total(),
            avg_fetch_ms: ratio(self.http_duration_total_ms(), requests),
            contacts_fetched: self.contacts_fetched_total(),
        }
    }
}

fn ratio(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Point-in-time copy of the counters, formatted for the shutdown log line.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub searches: u64,
    pub avg_matches: f64,
    pub http_requests: u64,
    pub http_errors: u64,
    pub avg_fetch_ms: f64,
    pub contacts_fetched: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "searches={} avg_matches={:.1} http_requests={} http_errors={} avg_ms={:.1} contacts_fetched={}",
            self.searches,
            self.avg_matches,
            self.http_requests,
            self.http_errors,
            self.avg_fetch_ms,
            self.contacts_fetched
        )
    }
}

/// Times one contact list request.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Record the request and count it as failed.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_collector_is_zeroed() {
        let summary = Metrics::new().summary();
        assert_eq!(summary.searches, 0);
        assert_eq!(summary.avg_fetch_ms, 0.0);
        assert_eq!(summary.avg_matches, 0.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let other = metrics.clone();
        other.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));

        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(other.http_duration_total_ms(), 300);
        assert_eq!(metrics.summary().avg_fetch_ms, 150.0);
    }

    #[test]
    fn test_summary_line() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(40));
        metrics.record_http_error();
        metrics.record_contacts_fetched(12);
        metrics.record_search(12);
        metrics.record_search(3);

        assert_eq!(
            metrics.summary().to_string(),
            "searches=2 avg_matches=7.5 http_requests=1 http_errors=1 avg_ms=40.0 contacts_fetched=12"
        );
    }

    #[test]
    fn test_failed_request_counts_twice() {
        let metrics = Metrics::new();
        HttpTimer::new(metrics.clone()).complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_searches_from_several_threads() {
        let metrics = Metrics::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        metrics.record_search(1);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.searches_total(), 200);
        assert_eq!(metrics.results_matched_total(), 200);
    }
}
