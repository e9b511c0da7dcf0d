//! Codepoint classification tables.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseClass {
    /// Terminal UI decoration: box drawing, blocks, shapes, symbols, dingbats.
    TerminalNoise,
    /// Pictographs and stand-alone marks used as decoration.
    DecorativeEmoji,
}

use NoiseClass::*;

/// Inclusive ranges sorted by start, non-overlapping.
pub static NOISE_RANGES: &[(u32, u32, NoiseClass)] = &[
    (0x2500, 0x257F, TerminalNoise),    // box drawing
    (0x2580, 0x259F, TerminalNoise),    // block elements
    (0x25A0, 0x25FF, TerminalNoise),    // geometric shapes
    (0x2600, 0x26FF, TerminalNoise),    // miscellaneous symbols
    (0x2700, 0x27BF, TerminalNoise),    // dingbats
    (0x1F300, 0x1F5FF, DecorativeEmoji), // symbols & pictographs
    (0x1F600, 0x1F64F, DecorativeEmoji), // emoticons
    (0x1F680, 0x1F6FF, DecorativeEmoji), // transport & map
    (0x1F900, 0x1F9FF, DecorativeEmoji), // supplemental symbols
];

/// Single decorative codepoints, sorted. Some also fall inside dingbats.
pub static DECORATIVE_POINTS: &[u32] = &[
    0x2713, // ✓
    0x2714, // ✔
    0x274C, // ❌
    0x274E, // ❎
    0x2B50, // ⭐
];

fn range_class(cp: u32) -> Option<NoiseClass> {
    NOISE_RANGES
        .binary_search_by(|&(start, end, _)| {
            if end < cp {
                Ordering::Less
            } else if start > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| NOISE_RANGES[idx].2)
}

pub fn is_terminal_noise(cp: u32) -> bool {
    range_class(cp) == Some(TerminalNoise)
}

pub fn is_decorative_emoji(cp: u32) -> bool {
    DECORATIVE_POINTS.binary_search(&cp).is_ok() || range_class(cp) == Some(DecorativeEmoji)
}

/// Classify a codepoint; terminal noise takes precedence where both apply.
pub fn classify(cp: u32) -> Option<NoiseClass> {
    if is_terminal_noise(cp) {
        Some(TerminalNoise)
    } else if is_decorative_emoji(cp) {
        Some(DecorativeEmoji)
    } else {
        None
    }
}
