//! Stroke sequences ("outlines").
//!
//! A steno dictionary is keyed by an outline: one or more strokes written in
//! sequence, serialized as the strokes joined by [`STROKE_DELIMITER`]
//! (e.g. `"KAT/KWREU"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Separator between strokes in the textual form of an outline.
pub const STROKE_DELIMITER: &str = "/";

/// An ordered sequence of strokes.
///
/// Ordering is lexicographic over the strokes, which is the last tie-breaker
/// used by the approximate rankings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outline(Vec<String>);

impl Outline {
    pub fn new<I, S>(strokes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(strokes.into_iter().map(Into::into).collect())
    }

    /// Parse the `/`-joined textual form. Never fails; an empty string yields
    /// a single empty stroke, mirroring a plain split.
    pub fn parse(text: &str) -> Self {
        Self(text.split(STROKE_DELIMITER).map(str::to_string).collect())
    }

    pub fn strokes(&self) -> &[String] {
        &self.0
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of characters over all strokes (delimiters excluded).
    pub fn key_count(&self) -> usize {
        self.0.iter().map(|s| s.chars().count()).sum()
    }

    /// The `/`-joined textual form.
    pub fn joined(&self) -> String {
        self.0.join(STROKE_DELIMITER)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl FromStr for Outline {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Outline::parse(s))
    }
}

impl From<&str> for Outline {
    fn from(s: &str) -> Self {
        Outline::parse(s)
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Outline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Outline::parse(&text))
    }
}

/// Canonical outline order: fewest strokes first, then fewest keys.
///
/// The sort is stable, so outlines that tie keep their incoming order.
pub fn sort_outlines(outlines: &mut [Outline]) {
    outlines.sort_by_key(|o| (o.len(), o.key_count()));
}
