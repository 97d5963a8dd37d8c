//! stenolex-directives
//!
//! Lexer and display labels for the formatting directives found in steno
//! dictionary translations (`{^ing}`, `{:mode:caps}`, `=repeat_last_stroke`,
//! ...).
//!
//! Public API:
//! - `lex` - scan a translation into `Directive`s
//! - `render` - label for one `Directive`
//! - `describe` - both at once
//! - `key_combo::parse` - the `{#...}` key-combo sub-grammar
//!
//! All of these are total: malformed input falls back to literal text and
//! unknown names to generic labels.

pub mod directive;
pub mod key_combo;
pub mod keynames;
pub mod lexer;
pub mod render;
pub mod tables;

pub use directive::{Directive, KeyCombo, Modifier};
pub use lexer::{lex, unescape};
pub use render::{format_text, render};

/// Labels for every directive in `text`, in order.
pub fn describe(text: &str) -> Vec<String> {
    lex(text).iter().map(render).collect()
}
