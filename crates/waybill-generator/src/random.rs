use crate::entropy::{Entropy, UuidEntropy};
use crate::{encode_body, Generator};
use waybill_core::{CountryCode, TrackingCode};

/// Generates tracking codes with a uniformly random 12 character body.
///
/// Each call draws a fresh 128-bit value from the entropy source and encodes
/// it in base 36, giving roughly 62 bits of entropy per code.
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator<E = UuidEntropy> {
    entropy: E,
}

impl RandomGenerator<UuidEntropy> {
    /// Creates a generator backed by random UUIDs.
    pub fn new() -> Self {
        Self::with_entropy(UuidEntropy)
    }
}

impl<E: Entropy> RandomGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }
}

impl<E: Entropy + 'static> Generator for RandomGenerator<E> {
    fn generate(&self, origin: &CountryCode, destination: &CountryCode) -> TrackingCode {
        let body = encode_body(self.entropy.next_u128());
        TrackingCode::compose(origin, &body, destination)
    }
}
