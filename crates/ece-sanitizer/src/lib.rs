//! Sanitizer — strips terminal decoration, decorative emoji, escape noise and
//! truncation markers from raw text.
//!
//! Stages (all in one left-to-right pass):
//! 1. Escape resolution (`\n`, `\t`, `\"`, `\\`, `\r`)
//! 2. UTF-8 decoding with truncation leniency ([`utf8`])
//! 3. Codepoint classification against static noise tables ([`noise`])
//! 4. Marker removal on the output as it grows ([`markers`])

pub mod cleanse;
pub mod markers;
pub mod noise;
pub mod utf8;

use std::sync::LazyLock;

pub use cleanse::Sanitizer;
pub use markers::MarkerStripper;
pub use noise::NoiseClass;

static DEFAULT_SANITIZER: LazyLock<Sanitizer> = LazyLock::new(Sanitizer::default);

/// Cleanse text with the default sanitizer.
pub fn cleanse(input: &str) -> String {
    DEFAULT_SANITIZER.cleanse(input)
}

/// Cleanse raw bytes with the default sanitizer. Truncated sequences pass through.
pub fn cleanse_bytes(input: &[u8]) -> Vec<u8> {
    DEFAULT_SANITIZER.cleanse_bytes(input)
}

#[cfg(test)]
mod tests;
