use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Domain counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub books_created: Arc<AtomicUsize>,
    pub books_updated: Arc<AtomicUsize>,
    pub books_deleted: Arc<AtomicUsize>,
    pub reviews_created: Arc<AtomicUsize>,
    pub auth_failures: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            books_created: Arc::new(AtomicUsize::new(0)),
            books_updated: Arc::new(AtomicUsize::new(0)),
            books_deleted: Arc::new(AtomicUsize::new(0)),
            reviews_created: Arc::new(AtomicUsize::new(0)),
            auth_failures: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_books_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reviews_created(&self) {
        self.reviews_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_auth_failures(&self) {
        self.auth_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            reviews_created: self.reviews_created.load(Ordering::Relaxed),
            auth_failures: self.auth_failures.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub books_created: usize,
    pub books_updated: usize,
    pub books_deleted: usize,
    pub reviews_created: usize,
    pub auth_failures: usize,
    pub uptime_seconds: u64,
}
