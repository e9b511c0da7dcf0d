//! Span-based segmentation.
//!
//! Every strategy produces byte ranges into the input. Ranges are increasing,
//! never overlap, start and end on char boundaries, and only whitespace lies
//! between them.

use std::ops::Range;
use std::sync::LazyLock;

use ece_core::AtomizerConfig;
use regex::Regex;

use crate::strategy::Strategy;

pub const DEFAULT_WINDOW_SIZE: usize = 32;

static RE_BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("blank line regex"));
static RE_SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["')\]]*(?:\s+|$)"#).expect("sentence end regex"));
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("token regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atomizer {
    pub strategy: Strategy,
    pub window_size: usize,
}

impl Atomizer {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, window_size: DEFAULT_WINDOW_SIZE }
    }

    pub fn from_config(config: &AtomizerConfig) -> Self {
        Self::new(Strategy::from_name(&config.default_strategy)).with_window_size(config.window_size)
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size.max(1);
        self
    }

    /// Byte ranges of each atom.
    pub fn spans(&self, input: &str) -> Vec<Range<usize>> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        match self.strategy {
            Strategy::Prose => prose_spans(input),
            Strategy::Code => code_spans(input),
            Strategy::Lines => line_spans(input),
            Strategy::Tokens => token_spans(input),
            Strategy::Window => window_spans(input, self.window_size),
        }
    }

    pub fn atomize(&self, input: &str) -> Vec<String> {
        let atoms: Vec<String> = self
            .spans(input)
            .into_iter()
            .map(|r| input[r].to_string())
            .collect();
        tracing::trace!(strategy = %self.strategy, atoms = atoms.len(), "atomized");
        atoms
    }

    /// Reassemble atoms with the strategy separator.
    pub fn join<S: AsRef<str>>(&self, atoms: &[S]) -> String {
        atoms
            .iter()
            .map(|a| a.as_ref())
            .collect::<Vec<_>>()
            .join(self.strategy.separator())
    }
}

impl Default for Atomizer {
    fn default() -> Self {
        Self::new(Strategy::Prose)
    }
}

/// Push `range` with surrounding whitespace removed, unless nothing remains.
fn push_trimmed(input: &str, range: Range<usize>, out: &mut Vec<Range<usize>>) {
    let slice = &input[range.clone()];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + (slice.len() - slice.trim_start().len());
    out.push(start..start + trimmed.len());
}

fn paragraph_ranges(input: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for m in RE_BLANK_LINE.find_iter(input) {
        ranges.push(start..m.start());
        start = m.end();
    }
    ranges.push(start..input.len());
    ranges
}

fn prose_spans(input: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    for para in paragraph_ranges(input) {
        let text = &input[para.clone()];
        let mut start = 0;
        for m in RE_SENTENCE_END.find_iter(text) {
            push_trimmed(input, para.start + start..para.start + m.end(), &mut spans);
            start = m.end();
        }
        push_trimmed(input, para.start + start..para.end, &mut spans);
    }
    spans
}

fn code_spans(input: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    for para in paragraph_ranges(input) {
        let block = &input[para.clone()];
        let end = block.trim_end().len();
        if end == 0 {
            continue;
        }
        // Drop leading blank lines but keep the first line's indentation.
        let mut start = 0;
        while let Some(nl) = block[start..end].find('\n') {
            if !block[start..start + nl].trim().is_empty() {
                break;
            }
            start += nl + 1;
        }
        spans.push(para.start + start..para.start + end);
    }
    spans
}

fn line_spans(input: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        push_trimmed(input, offset..offset + line.len(), &mut spans);
        offset += line.len();
    }
    spans
}

fn token_spans(input: &str) -> Vec<Range<usize>> {
    RE_TOKEN.find_iter(input).map(|m| m.range()).collect()
}

fn window_spans(input: &str, window_size: usize) -> Vec<Range<usize>> {
    token_spans(input)
        .chunks(window_size.max(1))
        .map(|w| w[0].start..w[w.len() - 1].end)
        .collect()
}
