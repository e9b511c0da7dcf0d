//! Lenient UTF-8 decoding over raw bytes.
//!
//! Only the leading byte pattern and the remaining length are checked;
//! continuation bytes are taken as-is. A leading byte that cannot start a
//! complete sequence is reported as a single invalid unit so the caller can
//! pass it through untouched.

/// One decoded unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub codepoint: u32,
    /// Bytes consumed by this unit.
    pub len: usize,
    /// `false` for a stray continuation byte, an unknown leading byte, or a
    /// sequence cut off by the end of input. `codepoint` is then the raw byte.
    pub valid: bool,
}

impl Decoded {
    fn raw(byte: u8) -> Self {
        Self { codepoint: byte as u32, len: 1, valid: byte < 0x80 }
    }

    /// A single plain byte. Overlong encodings of ASCII do not count.
    pub fn is_ascii(&self) -> bool {
        self.len == 1 && self.codepoint < 0x80
    }
}

/// Sequence length announced by a leading byte.
pub fn sequence_len(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Decode the unit starting at `at`. Returns `None` past the end of input.
pub fn decode_at(input: &[u8], at: usize) -> Option<Decoded> {
    let lead = *input.get(at)?;
    let len = match sequence_len(lead) {
        Some(n) if n > 1 && at + n <= input.len() => n,
        _ => return Some(Decoded::raw(lead)),
    };
    let payload = match len {
        2 => lead & 0x1F,
        3 => lead & 0x0F,
        _ => lead & 0x07,
    } as u32;
    let codepoint = input[at + 1..at + len]
        .iter()
        .fold(payload, |cp, &b| (cp << 6) | (b & 0x3F) as u32);
    Some(Decoded { codepoint, len, valid: true })
}

/// Iterator over `(offset, unit)` pairs.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Take the next byte without regard for sequence boundaries.
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = *self.input.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Bytes covered by a unit previously yielded at `offset`.
    pub fn bytes_of(&self, offset: usize, unit: &Decoded) -> &'a [u8] {
        &self.input[offset..offset + unit.len]
    }
}

impl Iterator for Decoder<'_> {
    type Item = (usize, Decoded);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        let unit = decode_at(self.input, offset)?;
        self.pos += unit.len;
        Some((offset, unit))
    }
}
