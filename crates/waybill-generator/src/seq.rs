use crate::{encode_body, Generator};
use std::sync::atomic::{AtomicU64, Ordering};
use waybill_core::{CountryCode, TrackingCode};

/// A deterministic generator whose body is a zero-padded base-36 counter.
///
/// This generator produces bodies like "000000000000", "000000000001", etc.
/// Codes are only unique within a single instance and restart from the offset
/// on every process start, so it is meant for tests and reproducible runs.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state or handing out disjoint
    /// counter ranges (e.g. one generator starts at 0, another at 1_000_000).
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self, origin: &CountryCode, destination: &CountryCode) -> TrackingCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        TrackingCode::compose(origin, &encode_body(u128::from(count)), destination)
    }
}
