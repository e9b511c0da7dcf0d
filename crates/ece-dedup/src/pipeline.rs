//! Cleanse → atomize → fingerprint → group.

use ece_atomizer::{Atomizer, Strategy};
use ece_core::EceConfig;
use ece_fingerprint::{Fingerprint, Fingerprinter};
use ece_sanitizer::Sanitizer;

use crate::dedup::{find_duplicates, merge_duplicates, DupGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomFingerprint {
    pub index: usize,
    pub text: String,
    pub fingerprint: Fingerprint,
}

#[derive(Debug, Clone)]
pub struct DedupReport {
    pub output: String,
    pub strategy: Strategy,
    pub atoms_in: usize,
    pub atoms_out: usize,
    pub groups: Vec<DupGroup>,
}

impl DedupReport {
    pub fn removed(&self) -> usize {
        self.atoms_in - self.atoms_out
    }
}

#[derive(Debug, Clone)]
pub struct Deduplicator {
    sanitizer: Sanitizer,
    atomizer: Atomizer,
    fingerprinter: Fingerprinter,
    pub max_distance: u32,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::from_config(&EceConfig::default())
    }

    pub fn from_config(config: &EceConfig) -> Self {
        Self {
            sanitizer: Sanitizer::from_config(&config.sanitizer),
            atomizer: Atomizer::from_config(&config.atomizer),
            fingerprinter: Fingerprinter::from_config(&config.fingerprint),
            max_distance: config.dedup.max_distance.min(64),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.atomizer.strategy = strategy;
        self
    }

    pub fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance.min(64);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.atomizer.strategy
    }

    /// Fingerprint of a whole document after cleansing.
    pub fn fingerprint_text(&self, text: &str) -> Fingerprint {
        self.fingerprinter.generate(&self.sanitizer.cleanse(text))
    }

    pub fn fingerprint_atoms(&self, text: &str) -> Vec<AtomFingerprint> {
        let clean = self.sanitizer.cleanse(text);
        self.atomizer
            .atomize(&clean)
            .into_iter()
            .enumerate()
            .map(|(index, text)| AtomFingerprint {
                index,
                fingerprint: self.fingerprinter.generate(&text),
                text,
            })
            .collect()
    }

    /// Group whole documents that are near-duplicates of each other.
    pub fn find_duplicate_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<DupGroup> {
        let fingerprints: Vec<Fingerprint> =
            texts.iter().map(|t| self.fingerprint_text(t.as_ref())).collect();
        find_duplicates(&fingerprints, self.max_distance)
    }

    /// Drop near-duplicate atoms and rejoin the survivors.
    pub fn dedup_text(&self, text: &str) -> DedupReport {
        let atoms = self.fingerprint_atoms(text);
        let fingerprints: Vec<Fingerprint> = atoms.iter().map(|a| a.fingerprint).collect();
        let groups = find_duplicates(&fingerprints, self.max_distance);
        let texts: Vec<&str> = atoms.iter().map(|a| a.text.as_str()).collect();
        let kept = merge_duplicates(&texts, &groups);

        tracing::debug!(
            strategy = %self.atomizer.strategy,
            atoms_in = atoms.len(),
            atoms_out = kept.len(),
            groups = groups.len(),
            "dedup complete"
        );

        DedupReport {
            output: self.atomizer.join(&kept),
            strategy: self.atomizer.strategy,
            atoms_in: atoms.len(),
            atoms_out: kept.len(),
            groups,
        }
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}
