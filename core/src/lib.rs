//! stenolex-core
//!
//! Dictionary lookup for steno dictionaries: resolves a search key (an outline
//! or a translation) against an ordered stack of dictionaries, applying
//! enabled/override precedence, and ranks approximate candidates.
//!
//! Public API:
//! - `Dictionary` - capability trait implemented by dictionary backends
//! - `Lexicon` - in-memory backend with Plover JSON loading
//! - `LookupEngine` - stroke/translation lookup, approximate search
//! - `Translation`, `LookupResultReason`, `LookupMethod` - result records
//! - `Outline` - stroke sequences
//! - `Config` - configuration, TOML (de)serialization
//!
//! Nothing here performs I/O except the explicit load/save helpers; lookups
//! are synchronous and only read the dictionaries they are handed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod dictionary;
pub use dictionary::{Dictionary, Entry};

pub mod outline;
pub use outline::{sort_outlines, Outline, STROKE_DELIMITER};

pub mod translation;
pub use translation::{LookupMethod, LookupResultReason, Translation};

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod fuzzy;
pub use fuzzy::rank_approx;

pub mod names;
pub use names::short_name;

pub mod engine;
pub use engine::{approx_equal, LookupEngine, LookupResult, SearchGroup, SearchResults};

/// Default cap on approximate candidates per search.
pub const MAX_RESULTS: usize = 50;

/// One dictionary in the configured stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub path: PathBuf,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Lookup configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of approximate candidates a search expands to.
    pub max_results: usize,

    /// Directory dictionary paths are shortened against for display, and
    /// relative dictionary paths are resolved against.
    pub dictionary_root: Option<PathBuf>,

    /// Dictionary stack, highest priority first.
    pub dictionaries: Vec<DictionaryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            dictionary_root: None,
            dictionaries: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Resolve a configured dictionary path against `dictionary_root`.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.dictionary_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load the configured dictionary stack, in priority order.
    pub fn load_dictionaries(&self) -> Result<Vec<Lexicon>> {
        self.dictionaries
            .iter()
            .map(|dc| {
                let lexicon = Lexicon::load_json(self.resolve_path(&dc.path))?;
                Ok(lexicon.with_enabled(dc.enabled))
            })
            .collect()
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.max_results, 50);
    }

    #[test]
    fn toml_dictionary_stack_keeps_order_and_flags() {
        let cfg = Config::from_toml_str(
            r#"
            max_results = 20
            dictionary_root = "/plover"

            [[dictionaries]]
            path = "user.json"

            [[dictionaries]]
            path = "main.json"
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_results, 20);
        assert_eq!(cfg.dictionaries.len(), 2);
        assert!(cfg.dictionaries[0].enabled);
        assert!(!cfg.dictionaries[1].enabled);
        assert_eq!(
            cfg.resolve_path(&cfg.dictionaries[1].path),
            PathBuf::from("/plover/main.json")
        );
    }

    #[test]
    fn toml_string_roundtrip() {
        let mut cfg = Config::default();
        cfg.dictionaries.push(DictionaryConfig {
            path: PathBuf::from("a.json"),
            enabled: false,
        });
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(Config::load_toml("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn normalize_composes_and_trims() {
        assert_eq!(utils::normalize("  cafe\u{301} "), "caf\u{e9}");
    }
}
