//! 64-bit locality-sensitive fingerprints and Hamming distance.

pub mod distance;
pub mod simhash;

pub use distance::{distance, distance_batch, nearest, similarity, within};
pub use simhash::Fingerprinter;

/// Opaque 64-bit fingerprint.
pub type Fingerprint = u64;

/// Fingerprint text with the default feature settings.
pub fn generate(text: &str) -> Fingerprint {
    Fingerprinter::default().generate(text)
}

/// Rebuild a fingerprint from a sign flag and little-endian 64-bit words, as
/// host big integers are exposed. Negative or wider-than-64-bit values are rejected;
/// negative zero is zero.
pub fn from_words(negative: bool, words: &[u64]) -> ece_core::Result<Fingerprint> {
    let significant = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    if significant > 1 {
        return Err(ece_core::EceError::InvalidArgument("fingerprint does not fit in 64 bits".into()));
    }
    let value = words.first().copied().unwrap_or(0);
    if negative && value != 0 {
        return Err(ece_core::EceError::InvalidArgument("fingerprint must not be negative".into()));
    }
    Ok(value)
}
