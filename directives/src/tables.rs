// directives/src/tables.rs
//
// Static name tables shared by the lexer (operator shorthands) and the
// renderer (friendly labels).

use phf::phf_map;

/// How a meta or macro name is shown.
#[derive(Clone, Copy)]
pub enum Friendly {
    /// Fixed label.
    Literal(&'static str),
    /// Label with a `{0}` slot for the first argument.
    Template(&'static str),
    /// Label built from the argument list; `None` when the arguments do not
    /// fit, in which case the generic label is used.
    Builder(fn(&[String]) -> Option<String>),
}

/// Operator shorthand -> (meta name, argument).
pub static OPERATOR_METAS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "-|" => ("case", "cap_first_word"),
    "<" => ("case", "upper_first_word"),
    ">" => ("case", "lower_first_char"),
    "." => ("stop", "."),
    "!" => ("stop", "!"),
    "?" => ("stop", "?"),
    "," => ("comma", ","),
    ":" => ("comma", ":"),
    ";" => ("comma", ";"),
};

/// Operator shorthand -> macro name.
pub static OPERATOR_MACROS: phf::Map<&'static str, &'static str> = phf_map! {
    "*" => "retrospective_toggle_asterisk",
    "*+" => "repeat_last_stroke",
    "*?" => "retrospective_insert_space",
    "*!" => "retrospective_delete_space",
};

pub static COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    "add_translation" => "Add Translation",
    "suspend" => "Disable Output",
    "resume" => "Enable Output",
    "toggle" => "Toggle Output",
    "lookup" => "Open Lookup Tool",
    "configure" => "Open Preferences",
    "focus" => "Show Main Window",
    "quit" => "Quit",
};

pub static MODES: phf::Map<&'static str, &'static str> = phf_map! {
    "caps" => "ALL CAPS",
    "title" => "Title Case",
    "lower" => "lower case",
    "camel" => "CamelCase",
    "snake" => "snake_case",
    "reset_case" => "Reset Case",
    "reset_space" => "Reset Space",
    "reset" => "Reset Case and Space",
    "clear" => "Reset Case and Space",
    "fancytext_off" => "Reset Fancy Text",
    "kebab" => "kebab-case",
    "fullwidth" => "ｆｕｌｌ\u{3000}ｗｉｄｔｈ",
    "sarcasm" => "sArCaSm",
    "zalgo" => "z\u{349}\u{336}a\u{315}l\u{32c}g\u{304}\u{359}o\u{315}",
};

pub static METAS: phf::Map<&'static str, Friendly> = phf_map! {
    "carry_capitalize" => Friendly::Literal("Carry Capitalization"),
    "case" => Friendly::Template("{0} Next Word"),
    "retro_case" => Friendly::Template("{0} Last Word"),
    "cap_first_word" => Friendly::Literal("Capitalize"),
    "upper_first_word" => Friendly::Literal("ALL CAPS"),
    "lower_first_char" => Friendly::Literal("lowercase"),
    "stop" => Friendly::Template("{0}"),
    "comma" => Friendly::Template("{0}"),
    "." => Friendly::Literal("Full Stop"),
    "!" => Friendly::Literal("Exclamation Mark"),
    "?" => Friendly::Literal("Question Mark"),
    "," => Friendly::Literal("Comma"),
    ":" => Friendly::Literal("Colon"),
    ";" => Friendly::Literal("Semicolon"),
    "retro_double_quotes" => Friendly::Builder(retro_double_quotes),
    "retro_single_quotes" => Friendly::Builder(retro_single_quotes),
    "retro_surround" => Friendly::Builder(retro_surround),
    "fancytext_retro" => Friendly::Builder(fancytext_retro),
};

pub static MACROS: phf::Map<&'static str, Friendly> = phf_map! {
    "undo" => Friendly::Literal("Undo Last Stroke"),
    "repeat_last_stroke" => Friendly::Literal("Repeat Last Stroke"),
    "retrospective_toggle_asterisk" => Friendly::Literal("Toggle * on Last Stroke"),
    "retrospective_insert_space" => Friendly::Literal("Retroactive Insert Space"),
    "retrospective_delete_space" => Friendly::Literal("Retroactive Delete Space"),
};

/// Glyphs for named keys.
pub static KEY_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "super" => "⌘",
    "control" => "⌃",
    "alt" => "⌥",
    "shift" => "⇧",
    "caps_lock" => "⇪",
    "return" => "⏎",
    "left" => "←",
    "right" => "→",
    "up" => "↑",
    "down" => "↓",
    "tab" => "⇥",
    "escape" => "⎋",
    "space" => "␣",
    "backspace" => "⌫",
};

/// "Last Word" or "Last N Words".
///
/// A count that is missing or not a number reads as one word.
fn last_words(num: Option<&String>) -> String {
    match num {
        Some(n) if n.trim().parse::<i64>().map_or(false, |v| v > 1) => {
            format!("Last {n} Words")
        }
        _ => "Last Word".to_string(),
    }
}

fn retro_quotes(args: &[String], kind: &str) -> Option<String> {
    if args.len() > 1 {
        return None;
    }
    Some(format!("Surround {} with {kind} Quotes", last_words(args.first())))
}

fn retro_double_quotes(args: &[String]) -> Option<String> {
    retro_quotes(args, "Double")
}

fn retro_single_quotes(args: &[String]) -> Option<String> {
    retro_quotes(args, "Single")
}

fn retro_surround(args: &[String]) -> Option<String> {
    let (num, left, right) = match args {
        [num, left, right] => (Some(num), left, right),
        [left, right] => (None, left, right),
        _ => return None,
    };
    Some(format!("Surround {} with {left} {right}", last_words(num)))
}

fn fancytext_retro(args: &[String]) -> Option<String> {
    let [num, transformer] = args else {
        return None;
    };
    let mode = MODES
        .get(transformer.to_lowercase().as_str())
        .copied()
        .unwrap_or(transformer.as_str());
    Some(format!("{mode} {}", last_words(Some(num))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plural_only_above_one() {
        assert_eq!(
            retro_double_quotes(&args(&["3"])).unwrap(),
            "Surround Last 3 Words with Double Quotes"
        );
        assert_eq!(
            retro_single_quotes(&args(&["1"])).unwrap(),
            "Surround Last Word with Single Quotes"
        );
        assert_eq!(
            retro_double_quotes(&[]).unwrap(),
            "Surround Last Word with Double Quotes"
        );
        assert_eq!(
            retro_double_quotes(&args(&["many"])).unwrap(),
            "Surround Last Word with Double Quotes"
        );
    }

    #[test]
    fn surround_with_and_without_count() {
        assert_eq!(
            retro_surround(&args(&["2", "(", ")"])).unwrap(),
            "Surround Last 2 Words with ( )"
        );
        assert_eq!(
            retro_surround(&args(&["[", "]"])).unwrap(),
            "Surround Last Word with [ ]"
        );
        assert!(retro_surround(&args(&["x"])).is_none());
    }

    #[test]
    fn fancytext_retro_uses_mode_labels() {
        assert_eq!(
            fancytext_retro(&args(&["2", "sarcasm"])).unwrap(),
            "sArCaSm Last 2 Words"
        );
        assert_eq!(
            fancytext_retro(&args(&["1", "bubble"])).unwrap(),
            "bubble Last Word"
        );
        assert!(fancytext_retro(&args(&["bubble"])).is_none());
    }

    #[test]
    fn operator_tables_cover_shorthands() {
        assert_eq!(OPERATOR_METAS.get("-|"), Some(&("case", "cap_first_word")));
        assert_eq!(OPERATOR_MACROS.get("*+"), Some(&"repeat_last_stroke"));
        assert!(OPERATOR_METAS.get("*").is_none());
    }
}
