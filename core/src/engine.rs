// core/src/engine.rs
//
// Layered dictionary lookup.
//
// A lookup walks the caller's dictionary stack in priority order, keeping the
// set of outlines already claimed by an earlier enabled dictionary. Every
// definition found is reported (the "full" result) with the reason it does or
// does not win; the winners are merged into the "short" result shown in the
// word list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::fuzzy::{approx_strokes, approx_translations};
use crate::names::short_name;
use crate::outline::{sort_outlines, Outline};
use crate::translation::{LookupMethod, LookupResultReason, Translation};
use crate::utils::normalize;
use crate::Config;

/// Attach-infix markers ignored when comparing a definition to a search key.
static ATTACH_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\^|\^\}$|\{\^").expect("attach marker pattern"));

/// True when `a` and `b` are equal once the `{^` / `^}` attach markers are
/// stripped from both.
pub fn approx_equal(a: &str, b: &str) -> bool {
    ATTACH_MARKERS.replace_all(a, "") == ATTACH_MARKERS.replace_all(b, "")
}

/// Per-dictionary and merged results for one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub full: Vec<Translation>,
    pub short: Vec<Translation>,
}

/// Results of a lookup for one approximate candidate of a search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchGroup {
    /// The candidate looked up (translation text or `/`-joined outline).
    pub key: String,
    pub short: Vec<Translation>,
    pub full: Vec<Translation>,
}

/// Everything a search produced, in candidate rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchResults {
    pub method: Option<LookupMethod>,
    pub groups: Vec<SearchGroup>,
}

impl SearchResults {
    /// The merged word list: every group's short results, in order.
    pub fn words(&self) -> impl Iterator<Item = &Translation> {
        self.groups.iter().flat_map(|g| g.short.iter())
    }

    /// Full results behind the group for `key`.
    pub fn details(&self, key: &str) -> Option<&[Translation]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.full.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Dictionary lookup engine.
///
/// Stateless apart from its configuration: each call only reads the
/// dictionaries it is handed and keeps no reference to them afterwards.
#[derive(Debug, Clone, Default)]
pub struct LookupEngine {
    config: Config,
}

impl LookupEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn dictionary_name<D: Dictionary>(&self, d: &D) -> String {
        short_name(d.path(), self.config.dictionary_root.as_deref())
    }

    /// One pass over `dicts` for each outline in `outlines`, classifying
    /// every definition found.
    ///
    /// The claimed set spans the whole pass, so an outline claimed by an
    /// earlier dictionary stays claimed for every later one.
    fn resolve<D: Dictionary>(&self, dicts: &[D], outlines: &[Outline]) -> Vec<Translation> {
        let mut claimed: HashSet<&Outline> = HashSet::new();
        let mut full = Vec::new();
        for d in dicts {
            let mut name: Option<String> = None;
            for outline in outlines {
                let Some(text) = d.get(outline) else {
                    continue;
                };
                let is_claimed = claimed.contains(outline);
                let reason = LookupResultReason::classify(d.enabled(), is_claimed);
                let comment = d.lookup(outline).and_then(|e| e.comment);
                let dictionary = name.get_or_insert_with(|| self.dictionary_name(d)).clone();
                full.push(Translation::full(outline.clone(), text, dictionary, comment, reason));
                if d.enabled() && !is_claimed {
                    claimed.insert(outline);
                }
            }
        }
        full
    }

    /// Look up what `key` translates to in each dictionary.
    ///
    /// `short` holds one merged result with the winning translation, or is
    /// empty when no enabled dictionary defines `key`.
    pub fn lookup_by_stroke<D: Dictionary>(&self, dicts: &[D], key: &Outline) -> LookupResult {
        let full = self.resolve(dicts, std::slice::from_ref(key));
        let short = full
            .iter()
            .find(|t| t.reason == LookupResultReason::Defined)
            .map(|t| vec![Translation::short(vec![key.clone()], t.translation.clone())])
            .unwrap_or_default();
        tracing::debug!(key = %key, full = full.len(), short = short.len(), "stroke lookup");
        LookupResult { full, short }
    }

    /// Look up which outlines produce `key` in each dictionary.
    ///
    /// Candidate outlines come from every dictionary's reverse index,
    /// including disabled ones, so overridden and disabled definitions show
    /// up in `full`. `short` merges the outlines whose winning definition
    /// matches `key`; failing that, it falls back to the outlines of any
    /// matching definition and is marked `bad`.
    pub fn lookup_by_translation<D: Dictionary>(&self, dicts: &[D], key: &str) -> LookupResult {
        let mut seen: HashSet<Outline> = HashSet::new();
        let mut candidates: Vec<Outline> = Vec::new();
        for d in dicts {
            for outline in d.reverse_lookup(key) {
                if seen.insert(outline.clone()) {
                    candidates.push(outline);
                }
            }
        }
        candidates.sort_by(|a, b| {
            (a.len(), a.key_count())
                .cmp(&(b.len(), b.key_count()))
                .then_with(|| a.cmp(b))
        });

        let full = self.resolve(dicts, &candidates);

        let matching = |good: bool| -> Vec<Outline> {
            let mut outlines: Vec<Outline> = Vec::new();
            for t in &full {
                let wanted = if good {
                    t.reason == LookupResultReason::Defined
                } else {
                    t.reason != LookupResultReason::Undefined
                };
                if wanted && approx_equal(&t.translation, key) {
                    for o in &t.outlines {
                        if !outlines.contains(o) {
                            outlines.push(o.clone());
                        }
                    }
                }
            }
            sort_outlines(&mut outlines);
            outlines
        };

        let good = matching(true);
        let short = if !good.is_empty() {
            vec![Translation::short(good, key)]
        } else {
            let any = matching(false);
            if any.is_empty() {
                Vec::new()
            } else {
                let mut t = Translation::short(any, key);
                t.bad = true;
                vec![t]
            }
        };
        tracing::debug!(key, candidates = candidates.len(), full = full.len(), "translation lookup");
        LookupResult { full, short }
    }

    /// Approximate translation candidates for `key`, best first.
    pub fn approx_translations<D: Dictionary>(&self, dicts: &[D], key: &str) -> Vec<String> {
        approx_translations(dicts, key, self.config.max_results)
    }

    /// Approximate outline candidates for `key`, best first.
    pub fn approx_strokes<D: Dictionary>(&self, dicts: &[D], key: &str) -> Vec<Outline> {
        approx_strokes(dicts, key, self.config.max_results)
    }

    /// Expand `text` into approximate candidates and look each one up.
    ///
    /// `text` is NFC-normalized and trimmed first; blank input yields no
    /// groups.
    pub fn search<D: Dictionary>(&self, dicts: &[D], method: LookupMethod, text: &str) -> SearchResults {
        let text = normalize(text);
        let mut results = SearchResults {
            method: Some(method),
            groups: Vec::new(),
        };
        if text.is_empty() {
            return results;
        }

        match method {
            LookupMethod::Translation => {
                for candidate in self.approx_translations(dicts, &text) {
                    let LookupResult { full, short } = self.lookup_by_translation(dicts, &candidate);
                    results.groups.push(SearchGroup { key: candidate, short, full });
                }
            }
            LookupMethod::Stroke => {
                for candidate in self.approx_strokes(dicts, &text) {
                    let LookupResult { full, short } = self.lookup_by_stroke(dicts, &candidate);
                    results.groups.push(SearchGroup {
                        key: candidate.joined(),
                        short,
                        full,
                    });
                }
            }
        }
        tracing::debug!(
            text = %text,
            ?method,
            groups = results.groups.len(),
            words = results.words().count(),
            "search"
        );
        results
    }
}
