//! Truncation marker removal.
//!
//! Bytes are appended to the output one at a time and any marker that now ends
//! the buffer is cut off. The buffer never holds a marker, so occurrences that
//! only form after an earlier removal are caught as well.

use ece_core::config::DEFAULT_MARKERS;

#[derive(Debug, Clone)]
pub struct MarkerStripper {
    /// Sorted by length descending.
    markers: Vec<Box<[u8]>>,
}

impl MarkerStripper {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut markers: Vec<Box<[u8]>> = markers
            .into_iter()
            .filter(|m| !m.as_ref().is_empty())
            .map(|m| m.as_ref().as_bytes().into())
            .collect();
        markers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        markers.dedup();
        Self { markers }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn push(&self, out: &mut Vec<u8>, byte: u8) {
        out.push(byte);
        for marker in &self.markers {
            if marker.last() == Some(&byte) && out.ends_with(marker) {
                out.truncate(out.len() - marker.len());
                return;
            }
        }
    }

    pub fn extend(&self, out: &mut Vec<u8>, bytes: &[u8]) {
        if self.markers.is_empty() {
            out.extend_from_slice(bytes);
            return;
        }
        for &b in bytes {
            self.push(out, b);
        }
    }

    /// Standalone pass over already-clean text.
    pub fn strip(&self, text: &str) -> String {
        let mut out = Vec::with_capacity(text.len());
        self.extend(&mut out, text.as_bytes());
        // Markers are whole UTF-8 strings, so cutting one never splits a char.
        String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl Default for MarkerStripper {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}
