//! Key-combo sub-grammar.
//!
//! A combo is a run of whitespace-separated keys, where `modifier(...)`
//! holds a modifier down for every key inside the parentheses:
//!
//! ```text
//! control(shift(a)) b   ->  [control+shift a] [b]
//! ```
//!
//! Modifier openers may carry an ignored `_l`/`_r` side suffix. Malformed
//! groups are tolerated: a `(` without a modifier name opens a group that
//! holds nothing, and a stray `)` is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::directive::{KeyCombo, Modifier};

static COMBO_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<open>control|shift|alt|super|option|windows|command)(?:_[lr])?\(|(?P<bad>\()|(?P<close>\))|(?P<key>[^()\s]+)",
    )
    .expect("key combo pattern")
});

/// Split `text` into keys with the modifiers active for each.
///
/// Matching is case-insensitive and keys come back lowercased.
pub fn parse(text: &str) -> Vec<KeyCombo> {
    let lowered = text.to_lowercase();
    let mut stack: Vec<Option<Modifier>> = Vec::new();
    let mut keys = Vec::new();

    for caps in COMBO_TOKEN.captures_iter(&lowered) {
        if let Some(open) = caps.name("open") {
            stack.push(Modifier::from_name(open.as_str()));
        } else if caps.name("bad").is_some() {
            stack.push(None);
        } else if caps.name("close").is_some() {
            stack.pop();
        } else if let Some(key) = caps.name("key") {
            keys.push(KeyCombo::new(stack.iter().flatten().copied(), key.as_str()));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use Modifier::*;

    #[test]
    fn nested_modifiers_apply_to_inner_key() {
        assert_eq!(
            parse("control(shift(a))"),
            vec![KeyCombo::new([Control, Shift], "a")]
        );
    }

    #[test]
    fn bare_keys() {
        assert_eq!(parse("a b"), vec![KeyCombo::bare("a"), KeyCombo::bare("b")]);
    }

    #[test]
    fn stray_close_is_ignored() {
        assert_eq!(parse("a)"), vec![KeyCombo::bare("a")]);
        assert_eq!(parse(") ) a"), vec![KeyCombo::bare("a")]);
    }

    #[test]
    fn aliases_and_side_suffixes() {
        assert_eq!(
            parse("Command_L(Option_R(tab))"),
            vec![KeyCombo::new([Super, Alt], "tab")]
        );
        assert_eq!(parse("windows(e)"), vec![KeyCombo::new([Super], "e")]);
    }

    #[test]
    fn modifiers_sorted_by_priority() {
        assert_eq!(
            parse("shift(alt(control(super(x))))"),
            vec![KeyCombo::new([Super, Control, Alt, Shift], "x")]
        );
        assert_eq!(
            parse("shift(alt(control(super(x))))")[0].modifiers,
            vec![Super, Control, Alt, Shift]
        );
    }

    #[test]
    fn group_scope_ends_at_close() {
        assert_eq!(
            parse("shift(a b) c"),
            vec![
                KeyCombo::new([Shift], "a"),
                KeyCombo::new([Shift], "b"),
                KeyCombo::bare("c"),
            ]
        );
    }

    #[test]
    fn unnamed_group_holds_nothing() {
        assert_eq!(
            parse("shift((a) b)"),
            vec![KeyCombo::new([Shift], "a"), KeyCombo::new([Shift], "b")]
        );
        assert_eq!(parse("(a)"), vec![KeyCombo::bare("a")]);
    }

    #[test]
    fn unknown_opener_is_a_key_then_bad_group() {
        // "ctrl" is not a modifier name, so it is a key and its "(" opens an
        // empty group.
        assert_eq!(
            parse("ctrl(c)"),
            vec![KeyCombo::bare("ctrl"), KeyCombo::bare("c")]
        );
    }

    #[test]
    fn repeated_modifier_counts_once() {
        assert_eq!(parse("shift(shift(a))"), vec![KeyCombo::new([Shift], "a")]);
    }

    #[test]
    fn blank_combo_has_no_keys() {
        assert!(parse("   ").is_empty());
    }
}
