// directives/src/directive.rs
//
// Token types produced by the lexer and consumed by the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key-combo modifier.
///
/// Declaration order is the display order: super, control, alt, shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Super,
    Control,
    Alt,
    Shift,
}

impl Modifier {
    /// Canonical modifier for an opener name, aliases included.
    ///
    /// Expects lowercase input.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "super" | "windows" | "command" => Some(Modifier::Super),
            "control" => Some(Modifier::Control),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modifier::Super => "super",
            Modifier::Control => "control",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One key of a key combo together with the modifiers held for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    /// Sorted, without duplicates.
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyCombo {
    pub fn new<I: IntoIterator<Item = Modifier>>(modifiers: I, key: impl Into<String>) -> Self {
        let mut modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        modifiers.sort();
        modifiers.dedup();
        Self {
            modifiers,
            key: key.into(),
        }
    }

    /// A key pressed without modifiers.
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            key: key.into(),
        }
    }
}

/// A single formatting instruction from a dictionary translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Directive {
    /// `{}`
    Cancel,
    /// `{#}`
    Noop,
    Space,
    /// Literal text.
    Text(String),
    /// `{PLOVER:name}`, name lowercased.
    Command(String),
    /// `{MODE:name}`, name lowercased.
    Mode(String),
    /// `{MODE:SET_SPACE:...}`, followed by the space text.
    ModeSpace,
    Glue(String),
    AttachRaw,
    AttachInfix,
    AttachPrefix,
    AttachSuffix,
    CarryCap,
    /// Retro currency; surrounding text tokens hold the symbols.
    Currency,
    KeyCombo(KeyCombo),
    Meta { name: String, args: Vec<String> },
    Macro { name: String, args: Vec<String> },
    /// `<:name:id>` reaction emoji markup.
    Emoji(String),
}

impl Directive {
    pub fn text(s: impl Into<String>) -> Self {
        Directive::Text(s.into())
    }

    pub fn mode(name: impl Into<String>) -> Self {
        Directive::Mode(name.into())
    }

    pub fn meta<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::Meta {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn macro_<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::Macro {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Upper-case kind name, e.g. `"ATTACH_SUFFIX"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::Cancel => "CANCEL",
            Directive::Noop => "NOOP",
            Directive::Space => "SPACE",
            Directive::Text(_) => "STRING",
            Directive::Command(_) => "COMMAND",
            Directive::Mode(_) => "MODE",
            Directive::ModeSpace => "MODE_SPACE",
            Directive::Glue(_) => "GLUE",
            Directive::AttachRaw => "ATTACH_RAW",
            Directive::AttachInfix => "ATTACH_INFIX",
            Directive::AttachPrefix => "ATTACH_PREFIX",
            Directive::AttachSuffix => "ATTACH_SUFFIX",
            Directive::CarryCap => "CARRY_CAP",
            Directive::Currency => "CURRENCY",
            Directive::KeyCombo(_) => "KEY_COMBO",
            Directive::Meta { .. } => "META",
            Directive::Macro { .. } => "MACRO",
            Directive::Emoji(_) => "DISC_EMOJI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_order_is_display_order() {
        let mut mods = vec![Modifier::Shift, Modifier::Alt, Modifier::Super, Modifier::Control];
        mods.sort();
        assert_eq!(
            mods,
            vec![Modifier::Super, Modifier::Control, Modifier::Alt, Modifier::Shift]
        );
    }

    #[test]
    fn modifier_aliases() {
        assert_eq!(Modifier::from_name("command"), Some(Modifier::Super));
        assert_eq!(Modifier::from_name("windows"), Some(Modifier::Super));
        assert_eq!(Modifier::from_name("option"), Some(Modifier::Alt));
        assert_eq!(Modifier::from_name("meta"), None);
    }

    #[test]
    fn key_combo_sorts_and_dedups_modifiers() {
        let combo = KeyCombo::new([Modifier::Shift, Modifier::Control, Modifier::Shift], "a");
        assert_eq!(combo.modifiers, vec![Modifier::Control, Modifier::Shift]);
    }
}
