//! Display labels for directives.
//!
//! `render` is a pure function of the directive: names are looked up in the
//! static tables in `tables`, with a generic label for anything unknown.

use crate::directive::{Directive, KeyCombo};
use crate::keynames::KEYNAME_TO_CHAR;
use crate::tables::{Friendly, COMMANDS, KEY_SYMBOLS, MACROS, METAS, MODES};

/// Display replacements applied to literal text, in order.
const TEXT_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{3000}", "‹U+3000›"),
    ("\\r\\n", "⏎"),
    ("\\r", "⏎"),
    ("\\n", "⏎"),
    ("\\t", "⇥"),
    ("\r\n", "⏎"),
    ("\r", "⏎"),
    ("\n", "⏎"),
    ("\t", "⇥"),
];

/// Label for one directive.
pub fn render(directive: &Directive) -> String {
    match directive {
        Directive::Cancel => "Cancel Formatting".to_string(),
        Directive::Noop => "Do Nothing".to_string(),
        Directive::Space => "Space".to_string(),
        Directive::Text(s) => format_text(s),
        Directive::Command(name) => command_label(name),
        Directive::Mode(name) => {
            let name = name.to_lowercase();
            match MODES.get(name.as_str()) {
                Some(label) => label.to_string(),
                None => format!("Mode: {name}"),
            }
        }
        Directive::ModeSpace => "Set Space:".to_string(),
        Directive::Glue(_) => "Glue:".to_string(),
        Directive::AttachRaw => "Attach".to_string(),
        Directive::AttachInfix => "Attach Infix:".to_string(),
        Directive::AttachPrefix => "Attach Prefix:".to_string(),
        Directive::AttachSuffix => "Attach Suffix:".to_string(),
        Directive::CarryCap => "Carry Capitalization".to_string(),
        Directive::Currency => "Format Currency".to_string(),
        Directive::KeyCombo(combo) => key_combo_label(combo),
        Directive::Meta { name, args } => friendly_label(&METAS, "Meta", name, args),
        Directive::Macro { name, args } => friendly_label(&MACROS, "Macro", name, args),
        Directive::Emoji(name) => format!(":{name}:"),
    }
}

/// Literal text with line breaks, tabs and ideographic spaces made visible.
pub fn format_text(s: &str) -> String {
    TEXT_REPLACEMENTS
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn command_label(name: &str) -> String {
    let name = name.to_lowercase();
    if let Some(friendly) = COMMANDS.get(name.as_str()) {
        return format!("Plover: {}", friendly.to_lowercase());
    }
    capitalize(&name.replace('_', " "))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn friendly_label(table: &phf::Map<&'static str, Friendly>, kind: &str, name: &str, args: &[String]) -> String {
    let name = name.to_lowercase();
    let label = match table.get(name.as_str()) {
        Some(Friendly::Literal(label)) => Some(label.to_string()),
        Some(Friendly::Template(template)) => args
            .first()
            .map(|arg| template.replace("{0}", &friendly_arg(table, arg))),
        Some(Friendly::Builder(build)) => build(args),
        None => None,
    };
    label.unwrap_or_else(|| generic_label(kind, &name, args))
}

/// Template argument: shown by its own table label when it has a fixed one.
fn friendly_arg(table: &phf::Map<&'static str, Friendly>, arg: &str) -> String {
    match table.get(arg) {
        Some(Friendly::Literal(label)) | Some(Friendly::Template(label)) => label.to_string(),
        _ => arg.to_string(),
    }
}

fn generic_label(kind: &str, name: &str, args: &[String]) -> String {
    if args.is_empty() {
        format!("{kind}: {name}")
    } else {
        format!("{kind}: {name}({})", args.join(", "))
    }
}

fn key_combo_label(combo: &KeyCombo) -> String {
    combo
        .modifiers
        .iter()
        .map(|m| key_label(m.name()))
        .chain(std::iter::once(key_label(&combo.key)))
        .collect()
}

fn key_label(key: &str) -> String {
    if key.chars().count() == 1 {
        return key.to_uppercase();
    }
    if let Some(symbol) = KEY_SYMBOLS.get(key) {
        return symbol.to_string();
    }
    if let Some(ch) = KEYNAME_TO_CHAR.get(key) {
        return ch.to_string();
    }
    format!("‹{key}›")
}
