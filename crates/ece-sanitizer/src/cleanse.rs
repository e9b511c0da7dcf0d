//! The cleanse pass.

use ece_core::SanitizerConfig;

use crate::markers::MarkerStripper;
use crate::noise::{self, NoiseClass};
use crate::utf8::Decoder;

/// Configured sanitizer. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    pub strip_terminal_noise: bool,
    pub strip_decorative_emoji: bool,
    markers: MarkerStripper,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::from_config(&SanitizerConfig::default())
    }

    pub fn from_config(config: &SanitizerConfig) -> Self {
        Self {
            strip_terminal_noise: config.strip_terminal_noise,
            strip_decorative_emoji: config.strip_decorative_emoji,
            markers: MarkerStripper::new(&config.markers),
        }
    }

    fn is_stripped(&self, cp: u32) -> bool {
        match noise::classify(cp) {
            Some(NoiseClass::TerminalNoise) => {
                self.strip_terminal_noise || (self.strip_decorative_emoji && noise::is_decorative_emoji(cp))
            }
            Some(NoiseClass::DecorativeEmoji) => self.strip_decorative_emoji,
            None => false,
        }
    }

    fn resolve_escape(&self, byte: u8, out: &mut Vec<u8>) {
        match byte {
            b'n' => self.markers.push(out, b'\n'),
            b't' => self.markers.push(out, b'\t'),
            b'"' => self.markers.push(out, b'"'),
            b'\\' => self.markers.push(out, b'\\'),
            b'r' => {}
            other => self.markers.extend(out, &[b'\\', other]),
        }
    }

    /// Cleanse raw bytes. Output is never longer than the input and never
    /// contains a marker, including ones formed by an earlier removal.
    pub fn cleanse_bytes(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        let mut decoder = Decoder::new(input);

        while let Some((offset, unit)) = decoder.next() {
            if unit.is_ascii() {
                if unit.codepoint == u32::from(b'\\') {
                    // A dangling backslash at end of input is dropped.
                    if let Some(next) = decoder.next_byte() {
                        self.resolve_escape(next, &mut out);
                    }
                } else {
                    self.markers.push(&mut out, unit.codepoint as u8);
                }
            } else if !unit.valid || !self.is_stripped(unit.codepoint) {
                self.markers.extend(&mut out, decoder.bytes_of(offset, &unit));
            }
        }

        tracing::trace!(input_len = input.len(), output_len = out.len(), "cleansed");
        out
    }

    pub fn cleanse(&self, input: &str) -> String {
        let out = self.cleanse_bytes(input.as_bytes());
        // Valid input only ever loses whole sequences, so this stays valid UTF-8.
        String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
