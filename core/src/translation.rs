//! Lookup result records.
//!
//! This module provides:
//! - `Translation`: one row of a lookup result (per dictionary, or merged)
//! - `LookupResultReason`: why a dictionary did or did not supply the winner
//! - `LookupMethod`: which side of the dictionary a search key addresses

use serde::{Deserialize, Serialize};

use crate::outline::Outline;

/// Classification of a dictionary's definition for a key within one lookup
/// pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupResultReason {
    #[default]
    Undefined,
    /// Defined by a dictionary that is switched off.
    Disabled,
    /// Defined, but an earlier enabled dictionary already claimed the outline.
    Overridden,
    Deleted,
    /// The definition that wins for this outline.
    Defined,
}

impl LookupResultReason {
    /// Lowercase name, e.g. `"overridden"`.
    pub fn name(self) -> &'static str {
        match self {
            LookupResultReason::Undefined => "undefined",
            LookupResultReason::Disabled => "disabled",
            LookupResultReason::Overridden => "overridden",
            LookupResultReason::Deleted => "deleted",
            LookupResultReason::Defined => "defined",
        }
    }

    /// Reason for a dictionary that defines an outline, given whether the
    /// dictionary is enabled and whether the outline was already claimed
    /// earlier in the same pass.
    pub fn classify(enabled: bool, claimed: bool) -> Self {
        if !enabled {
            LookupResultReason::Disabled
        } else if claimed {
            LookupResultReason::Overridden
        } else {
            LookupResultReason::Defined
        }
    }
}

/// Which side of the dictionaries a search key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMethod {
    /// Key is translation text; find the outlines that produce it.
    Translation,
    /// Key is an outline; find what it translates to.
    Stroke,
}

/// A single lookup result row.
///
/// Full results carry the dictionary, comment and reason of one definition.
/// Short results are synthesized per key and only fill `outlines`,
/// `translation` and `bad`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(rename = "strokes")]
    pub outlines: Vec<Outline>,
    pub translation: String,
    pub dictionary: Option<String>,
    pub comment: Option<String>,
    /// Set on a short result whose outlines only come from overridden or
    /// disabled definitions.
    pub bad: bool,
    pub reason: LookupResultReason,
}

impl Translation {
    /// A merged (short) result.
    pub fn short<T: Into<String>>(outlines: Vec<Outline>, translation: T) -> Self {
        Self {
            outlines,
            translation: translation.into(),
            ..Default::default()
        }
    }

    /// A per-dictionary (full) result for a single outline.
    pub fn full(
        outline: Outline,
        translation: String,
        dictionary: String,
        comment: Option<String>,
        reason: LookupResultReason,
    ) -> Self {
        Self {
            outlines: vec![outline],
            translation,
            dictionary: Some(dictionary),
            comment,
            bad: false,
            reason,
        }
    }
}
