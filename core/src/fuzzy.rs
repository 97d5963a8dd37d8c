//! Approximate matching of search keys against dictionary contents.
//!
//! A search key expands to every translation (or outline) that contains it,
//! ranked by how closely it matches:
//!
//! - tier 0: case-insensitive exact match
//! - tier 1: case-insensitive prefix match
//! - tier 2: anything else containing the key
//!
//! Ties are broken by length, then by natural ordering.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::outline::Outline;

/// Match tier of `candidate` against `key` (lower is better).
pub fn rank_approx(key: &str, candidate: &str) -> u8 {
    let key = key.to_lowercase();
    let candidate = candidate.to_lowercase();
    if key == candidate {
        0
    } else if candidate.starts_with(&key) {
        1
    } else {
        2
    }
}

/// Translations across `dicts` containing `key` (case-insensitive), plus
/// `key` itself, best first, at most `limit`.
pub fn approx_translations<D: Dictionary>(dicts: &[D], key: &str, limit: usize) -> Vec<String> {
    let needle = key.to_lowercase();
    let mut found: HashSet<String> = HashSet::new();
    found.insert(key.to_string());
    for d in dicts {
        for tl in d.translations() {
            if !found.contains(tl) && tl.to_lowercase().contains(&needle) {
                found.insert(tl.to_string());
            }
        }
    }

    let mut ranked: Vec<(u8, usize, String)> = found
        .into_iter()
        .map(|tl| (rank_approx(key, &tl), tl.chars().count(), tl))
        .collect();
    ranked.sort();
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, _, tl)| tl).collect()
}

/// Outlines across `dicts` whose joined text contains `key`
/// (case-insensitive), plus `key` parsed as an outline, best first, at most
/// `limit`.
///
/// Ties within a tier go to fewer strokes, then fewer keys.
pub fn approx_strokes<D: Dictionary>(dicts: &[D], key: &str, limit: usize) -> Vec<Outline> {
    let needle = key.to_uppercase();
    let mut found: HashSet<Outline> = HashSet::new();
    found.insert(Outline::parse(key));
    for d in dicts {
        for outline in d.outlines() {
            if !found.contains(outline) && outline.joined().to_uppercase().contains(&needle) {
                found.insert(outline.clone());
            }
        }
    }

    let mut ranked: Vec<(u8, Outline)> = found
        .into_iter()
        .map(|o| (rank_approx(key, &o.joined()), o))
        .collect();
    ranked.sort_by(|(ta, a), (tb, b)| compare_outlines(*ta, a, *tb, b));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, o)| o).collect()
}

fn compare_outlines(ta: u8, a: &Outline, tb: u8, b: &Outline) -> Ordering {
    ta.cmp(&tb)
        .then_with(|| a.len().cmp(&b.len()))
        .then_with(|| a.key_count().cmp(&b.key_count()))
        .then_with(|| a.cmp(b))
}
