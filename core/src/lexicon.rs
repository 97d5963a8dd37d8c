//! In-memory steno dictionary.
//!
//! `Lexicon` is the default `Dictionary` backend: a forward map from outline
//! to translation, a reverse index from translation to every outline that
//! produces it, and optional per-entry comments.
//!
//! Files use the Plover JSON layout, an object keyed by `/`-joined outlines:
//!
//! ```json
//! {
//!   "KAT": "cat",
//!   "KAT/TKPWOR/REU": {"translation": "category", "comment": "briefed"}
//! }
//! ```
//!
//! Plain string values are the common case; the object form carries a
//! comment alongside the translation.

use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::dictionary::{Dictionary, Entry};
use crate::outline::Outline;

/// On-disk value: either a bare translation or a translation with comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Plain(String),
    Commented {
        translation: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

/// In-memory dictionary with a reverse index.
#[derive(Debug, Clone)]
pub struct Lexicon {
    path: String,
    enabled: bool,
    entries: AHashMap<Outline, String>,
    comments: AHashMap<Outline, String>,
    reverse: AHashMap<String, Vec<Outline>>,
}

impl Lexicon {
    /// Create an empty, enabled lexicon identified by `path`.
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            path: path.into(),
            enabled: true,
            entries: AHashMap::new(),
            comments: AHashMap::new(),
            reverse: AHashMap::new(),
        }
    }

    /// Builder-style toggle of the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Define `outline` as `translation`, replacing any previous definition.
    pub fn insert<O: Into<Outline>, T: Into<String>>(&mut self, outline: O, translation: T) {
        let outline = outline.into();
        let translation = translation.into();
        self.unindex(&outline);
        self.comments.remove(&outline);
        self.reverse
            .entry(translation.clone())
            .or_default()
            .push(outline.clone());
        self.entries.insert(outline, translation);
    }

    /// Define `outline` with an attached comment.
    pub fn insert_with_comment<O: Into<Outline>, T: Into<String>, C: Into<String>>(
        &mut self,
        outline: O,
        translation: T,
        comment: C,
    ) {
        let outline = outline.into();
        self.insert(outline.clone(), translation);
        self.comments.insert(outline, comment.into());
    }

    /// Remove a definition. Returns the translation it had, if any.
    pub fn remove(&mut self, outline: &Outline) -> Option<String> {
        self.unindex(outline);
        self.comments.remove(outline);
        self.entries.remove(outline)
    }

    fn unindex(&mut self, outline: &Outline) {
        let Some(old) = self.entries.get(outline) else {
            return;
        };
        if let Some(bucket) = self.reverse.get_mut(old) {
            bucket.retain(|o| o != outline);
            if bucket.is_empty() {
                self.reverse.remove(old);
            }
        }
    }

    /// Number of defined outlines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse Plover-style JSON text into a lexicon identified by `path`.
    pub fn from_json_str<P: Into<String>>(path: P, json: &str) -> Result<Self> {
        let path = path.into();
        let raw: BTreeMap<String, StoredValue> = serde_json::from_str(json)
            .with_context(|| format!("parse dictionary {}", path))?;
        Ok(Self::from_stored(path, raw))
    }

    /// Load a Plover-style JSON dictionary file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open dictionary {}", path.display()))?;
        let raw: BTreeMap<String, StoredValue> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse dictionary {}", path.display()))?;
        let lexicon = Self::from_stored(path.display().to_string(), raw);
        tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded dictionary");
        Ok(lexicon)
    }

    fn from_stored(path: String, raw: BTreeMap<String, StoredValue>) -> Self {
        let mut lexicon = Self::new(path);
        for (key, value) in raw {
            if key.is_empty() {
                tracing::warn!(path = %lexicon.path, "skipping entry with empty outline");
                continue;
            }
            let outline = Outline::parse(&key);
            match value {
                StoredValue::Plain(translation) => lexicon.insert(outline, translation),
                StoredValue::Commented {
                    translation,
                    comment: Some(comment),
                } => lexicon.insert_with_comment(outline, translation, comment),
                StoredValue::Commented {
                    translation,
                    comment: None,
                } => lexicon.insert(outline, translation),
            }
        }
        lexicon
    }

    /// Write the lexicon back out as JSON, keys sorted.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let stored: BTreeMap<String, StoredValue> = self
            .entries
            .iter()
            .map(|(outline, translation)| {
                let value = match self.comments.get(outline) {
                    Some(comment) => StoredValue::Commented {
                        translation: translation.clone(),
                        comment: Some(comment.clone()),
                    },
                    None => StoredValue::Plain(translation.clone()),
                };
                (outline.joined(), value)
            })
            .collect();
        let file =
            File::create(path).with_context(|| format!("create dictionary {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &stored)
            .with_context(|| format!("write dictionary {}", path.display()))?;
        Ok(())
    }
}

impl Dictionary for Lexicon {
    fn path(&self) -> &str {
        &self.path
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn get(&self, outline: &Outline) -> Option<String> {
        self.entries.get(outline).cloned()
    }

    fn reverse_lookup(&self, translation: &str) -> Vec<Outline> {
        self.reverse.get(translation).cloned().unwrap_or_default()
    }

    fn lookup(&self, outline: &Outline) -> Option<Entry> {
        self.entries.get(outline).map(|translation| Entry {
            translation: translation.clone(),
            comment: self.comments.get(outline).cloned(),
        })
    }

    fn outlines(&self) -> Box<dyn Iterator<Item = &Outline> + '_> {
        Box::new(self.entries.keys())
    }

    fn translations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.reverse.keys().map(String::as_str))
    }
}
