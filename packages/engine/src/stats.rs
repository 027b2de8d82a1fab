//! Lookup statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters shared by every call on one facade instance
#[derive(Debug, Default)]
pub struct LookupStats {
    /// Number of path or key lookups performed
    pub lookups: AtomicU64,
    /// Lookups that produced at least one value
    pub matches: AtomicU64,
    /// Lookups that produced nothing
    pub misses: AtomicU64,
    /// Inputs rejected as malformed JSON
    pub decode_errors: AtomicU64,
    /// Total input bytes handed to the decoder
    pub bytes_processed: AtomicU64,
}

/// Point-in-time copy of [`LookupStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupStatsSnapshot {
    pub lookups: u64,
    pub matches: u64,
    pub misses: u64,
    pub decode_errors: u64,
    pub bytes_processed: u64,
}

impl LookupStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one lookup
    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if found {
            self.matches.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bytes(&self, bytes: u64) {
        self.bytes_processed.fetch_add(bytes, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> LookupStatsSnapshot {
        LookupStatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            matches: self.matches.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
            bytes_processed: self.bytes_processed.load(Ordering::Relaxed),
        }
    }
}

impl LookupStatsSnapshot {
    /// Fraction of lookups that found something, 0.0 when nothing ran yet
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.matches as f64 / self.lookups as f64
        }
    }
}
