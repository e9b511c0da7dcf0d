//! Grouping by fingerprint distance.

use std::collections::HashSet;

use ece_fingerprint::{distance, Fingerprint};

/// Duplicate group. `indices[0]` is the anchor every other member was compared to.
#[derive(Debug, Clone, PartialEq)]
pub struct DupGroup {
    pub indices: Vec<usize>,
    pub mean_distance: f64,
}

/// Greedy grouping: each unused entry claims every later unused entry within
/// `max_distance`.
pub fn find_duplicates(fingerprints: &[Fingerprint], max_distance: u32) -> Vec<DupGroup> {
    if fingerprints.len() < 2 {
        return Vec::new();
    }

    let mut used: HashSet<usize> = HashSet::new();
    let mut groups = Vec::new();

    for i in 0..fingerprints.len() {
        if used.contains(&i) {
            continue;
        }
        let mut group = vec![i];
        let mut total = 0u32;

        for j in (i + 1)..fingerprints.len() {
            if used.contains(&j) {
                continue;
            }
            let d = distance(fingerprints[i], fingerprints[j]);
            if d <= max_distance {
                group.push(j);
                total += d;
            }
        }
        if group.len() > 1 {
            let mean_distance = total as f64 / (group.len() - 1) as f64;
            used.extend(group.iter().copied());
            groups.push(DupGroup { indices: group, mean_distance });
        }
    }
    groups
}

/// Keep the longest entry of each group; everything else keeps its order.
pub fn merge_duplicates<S: AsRef<str>>(entries: &[S], groups: &[DupGroup]) -> Vec<String> {
    let mut removed: HashSet<usize> = HashSet::new();
    for g in groups {
        let best = g
            .indices
            .iter()
            .copied()
            .filter(|&idx| idx < entries.len())
            .max_by_key(|&idx| (entries[idx].as_ref().len(), std::cmp::Reverse(idx)));
        if let Some(best) = best {
            removed.extend(g.indices.iter().copied().filter(|&idx| idx != best));
        }
    }
    entries
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, e)| e.as_ref().to_string())
        .collect()
}
