pub mod entropy;
pub mod random;
pub mod seq;

pub use entropy::{Entropy, UuidEntropy};
pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use waybill_core::tracking_code::BODY_LENGTH;
use waybill_core::{CountryCode, TrackingCode};

/// Symbols a tracking code body is drawn from.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Trait for generating candidate tracking codes.
///
/// Implementations are pure generators that don't interact with storage and
/// cannot fail. Uniqueness is decided by the registry the candidate is
/// offered to, not by the generator.
pub trait Generator: Send + Sync + 'static {
    /// Generates a candidate code for a shipment from `origin` to `destination`.
    fn generate(&self, origin: &CountryCode, destination: &CountryCode) -> TrackingCode;
}

/// Encodes the lowest [`BODY_LENGTH`] base-36 digits of `value`, most
/// significant digit first.
pub(crate) fn encode_body(mut value: u128) -> String {
    let radix = ALPHABET.len() as u128;
    let mut digits = [ALPHABET[0]; BODY_LENGTH];

    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % radix) as usize];
        value /= radix;
    }

    digits.iter().map(|&b| char::from(b)).collect()
}
