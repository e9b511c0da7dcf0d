//! SimHash over word n-gram features.
//!
//! Each feature is hashed to 64 bits and votes +1/-1 on every bit position;
//! the fingerprint keeps the bits with a positive tally. Texts sharing most
//! features therefore share most bits.

use ece_core::FingerprintConfig;
use xxhash_rust::xxh64::Xxh64;

use crate::Fingerprint;

const CHAR_SHINGLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprinter {
    pub max_ngram: usize,
    pub seed: u64,
}

impl Fingerprinter {
    pub fn new(max_ngram: usize, seed: u64) -> Self {
        Self { max_ngram: max_ngram.max(1), seed }
    }

    pub fn from_config(config: &FingerprintConfig) -> Self {
        Self::new(config.max_ngram, config.seed)
    }

    /// Blank text maps to 0.
    pub fn generate(&self, text: &str) -> Fingerprint {
        if text.trim().is_empty() {
            return 0;
        }
        fold(&self.features(text))
    }

    /// Feature hashes: word n-grams, or character shingles when there are no words.
    pub fn features(&self, text: &str) -> Vec<u64> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return self.char_features(text);
        }
        let mut features = Vec::with_capacity(tokens.len() * self.max_ngram);
        for n in 1..=self.max_ngram.min(tokens.len()) {
            for gram in tokens.windows(n) {
                let mut hasher = Xxh64::new(self.seed);
                for (i, token) in gram.iter().enumerate() {
                    if i > 0 {
                        hasher.update(b" ");
                    }
                    hasher.update(token.as_bytes());
                }
                features.push(hasher.digest());
            }
        }
        features
    }

    fn char_features(&self, text: &str) -> Vec<u64> {
        let chars: Vec<char> = text.trim().chars().collect();
        if chars.len() < CHAR_SHINGLE {
            return vec![self.hash_chars(&chars)];
        }
        chars.windows(CHAR_SHINGLE).map(|w| self.hash_chars(w)).collect()
    }

    fn hash_chars(&self, chars: &[char]) -> u64 {
        let mut hasher = Xxh64::new(self.seed);
        let mut buf = [0u8; 4];
        for c in chars {
            hasher.update(c.encode_utf8(&mut buf).as_bytes());
        }
        hasher.digest()
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::from_config(&FingerprintConfig::default())
    }
}

/// Lowercased alphanumeric words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Collapse feature hashes into one fingerprint by per-bit majority.
pub fn fold(features: &[u64]) -> Fingerprint {
    let mut acc = [0i32; 64];
    for &h in features {
        for (bit, tally) in acc.iter_mut().enumerate() {
            *tally += if (h >> bit) & 1 == 1 { 1 } else { -1 };
        }
    }
    acc.iter()
        .enumerate()
        .filter(|&(_, &tally)| tally > 0)
        .fold(0u64, |out, (bit, _)| out | (1u64 << bit))
}
