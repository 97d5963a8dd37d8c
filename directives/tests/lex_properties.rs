//! Property-based tests for the directive lexer and renderer.
//!
//! - lexing and rendering are total over arbitrary strings
//! - brace-free text is covered end to end, `=` included
//! - plain text comes back as a single text token
//! - cancel braces split plain text without losing characters
//! - rendering is deterministic

use proptest::prelude::*;
use stenolex_directives::{lex, render, Directive};

/// Text with no directive syntax in it.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9,.!?'-][a-zA-Z0-9 ,.!?'-]{1,20}"
}

/// Brace- and backslash-free text mixing in `=`, angle brackets, colons
/// and whitespace. A leading `=` would read as a whole-input macro.
fn unbraced_text_strategy() -> impl Strategy<Value = String> {
    "[a-z<>: \n][a-z=<>: \n]{0,29}"
}

/// Short strings built from directive syntax fragments.
fn directive_soup_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{".to_string()),
        Just("}".to_string()),
        Just("^".to_string()),
        Just("\\".to_string()),
        Just(":".to_string()),
        Just("=".to_string()),
        Just("~|".to_string()),
        Just("*(".to_string()),
        Just("<:".to_string()),
        Just("MODE".to_string()),
        Just("#".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        "[a-z ]{1,4}",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn lex_and_render_never_panic(s in "\\PC{0,40}") {
        for d in lex(&s) {
            let _ = render(&d);
        }
    }

    #[test]
    fn directive_soup_is_handled(s in directive_soup_strategy()) {
        for d in lex(&s) {
            let _ = render(&d);
        }
    }

    #[test]
    fn unbraced_text_is_fully_covered(s in unbraced_text_strategy()) {
        let rebuilt: String = lex(&s)
            .iter()
            .map(|d| match d {
                Directive::Text(t) => t.as_str(),
                Directive::Space => " ",
                other => panic!("unexpected directive {other:?} in {s:?}"),
            })
            .collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn plain_text_is_one_token(s in plain_text_strategy()) {
        prop_assert_eq!(lex(&s), vec![Directive::Text(s.clone())]);
    }

    #[test]
    fn cancel_splits_text(parts in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let joined = parts.join("{}");
        let tokens = lex(&joined);
        prop_assert_eq!(tokens.len(), parts.len() * 2 - 1);

        let texts: Vec<String> = tokens
            .iter()
            .filter_map(|d| match d {
                Directive::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(texts, parts.clone());
        prop_assert_eq!(
            tokens.iter().filter(|d| **d == Directive::Cancel).count(),
            parts.len() - 1
        );
    }

    #[test]
    fn render_is_deterministic(s in directive_soup_strategy()) {
        for d in lex(&s) {
            prop_assert_eq!(render(&d), render(&d));
        }
    }
}
