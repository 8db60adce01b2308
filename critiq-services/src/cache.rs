//! TTL cache over completed reviews.

use std::time::Duration;

use moka::sync::Cache;

use critiq_core::{ReviewRequest, ReviewResponse};

/// Default lifetime of a cached review.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Default maximum number of cached reviews.
pub const DEFAULT_CAPACITY: u64 = 256;

/// Cache of completed reviews keyed by the full request.
///
/// Any change to the repository, description, or candidate level misses.
/// Entries expire after their time-to-live, so a re-pushed repository gets
/// a fresh review shortly.
pub struct ReviewCache {
    inner: Cache<ReviewRequest, ReviewResponse>,
}

impl ReviewCache {
    /// Creates a cache with default capacity and lifetime.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Creates a cache with explicit capacity and lifetime.
    pub fn with_settings(capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Looks up the review for an identical earlier request.
    pub fn get(&self, request: &ReviewRequest) -> Option<ReviewResponse> {
        self.inner.get(request)
    }

    /// Stores a completed review.
    pub fn insert(&self, request: ReviewRequest, response: ReviewResponse) {
        self.inner.insert(request, response);
    }
}

impl Default for ReviewCache {
    fn default() -> Self {
        Self::new()
    }
}
