//! Near-duplicate detection — cleanse, atomize, fingerprint, then group atoms
//! whose fingerprints sit within a Hamming threshold.

pub mod dedup;
pub mod pipeline;

pub use dedup::{find_duplicates, merge_duplicates, DupGroup};
pub use pipeline::{AtomFingerprint, DedupReport, Deduplicator};
