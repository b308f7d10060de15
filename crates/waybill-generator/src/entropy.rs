use uuid::Uuid;

/// A source of 128-bit random values.
pub trait Entropy: Send + Sync {
    /// Returns the next random value.
    fn next_u128(&self) -> u128;
}

/// Draws entropy from random (version 4) UUIDs.
///
/// A v4 UUID carries 122 random bits. The generator only consumes the low
/// ~62 bits worth of base-36 digits, so the fixed version and variant bits
/// leave plenty of headroom.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidEntropy;

impl Entropy for UuidEntropy {
    fn next_u128(&self) -> u128 {
        Uuid::new_v4().as_u128()
    }
}
