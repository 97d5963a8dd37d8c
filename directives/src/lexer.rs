// directives/src/lexer.rs
//
// Ordered-choice lexer for dictionary translation strings.
//
// A single case-insensitive regex holds every directive form as an
// alternative, in priority order. Forms overlap on purpose (carry-capitalize
// before attach, attach before operators), and leftmost-first alternation
// makes the earliest listed form win. The last alternative accepts any
// character, so successive matches cover the whole input.
//
// Fusion needs one token of look-back: the most recent token is held in a
// pending slot until the next match shows whether it should be replaced.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::directive::Directive;
use crate::key_combo;
use crate::tables::{OPERATOR_MACROS, OPERATOR_METAS};

/// Brace body character: an escaped backslash or closing brace, or anything
/// but `}`.
const BODY: &str = r"(?:\\\\|\\\}|[^}])";

const FORMS: &[&str] = &[
    r"(?P<escaped>\\\\|\\\{|\\\})",
    r"\{(?P<space>)\s+\}",
    r"(?P<cancel>\{\})",
    r"(?P<noop>\{#\})",
    r"^=(?P<macro_name>\w+)(?::(?P<macro_args>.+))?$",
    r"\{(?:PLOVER|:command):(?P<command>[^}]+?)\}",
    r"\{(?:MODE|:mode):(?:SET_SPACE:(?P<mode_space>BODY*?)|(?P<mode>[^}]+?))\}",
    r"\{(?:&|:glue:)(?P<glue>BODY+?)\}",
    r"\{(?:\^~\||:carry_capitalize:\^)(?P<carry_cap_infix>BODY+?)\^\}",
    r"\{(?:\^~\||:carry_capitalize:\^)(?P<carry_cap_suffix>BODY+?)\}",
    r"\{(?:~\||:carry_capitalize:)(?P<carry_cap_prefix>BODY+?)\^\}",
    r"\{(?:~\||:carry_capitalize:)(?P<carry_cap>BODY+?)\}",
    r"\{(?::attach|\^)(?P<attach_raw>)\}",
    r"\{\^(?P<attach_infix>BODY+?)\^\}",
    r"\{:attach:(?P<attach_infix_2>(?:\\\\|\\\}|[^}^])+?)\}",
    r"\{(?::attach:)?\^(?P<attach_suffix>BODY+?)\}",
    r"\{(?::attach:)?(?P<attach_prefix>BODY+?)\^\}",
    r"\{(?:\*\(|:retro_currency:)(?P<currency_pre>BODY*?)c(?P<currency_post>BODY*?)\)?\}",
    r"\{(?:#|:key_combo:)(?P<key_combo>[^}]+?)\}",
    r"\{:(?P<meta_name>\w+)(?::(?P<meta_args>[^}]+?))?\}",
    r"\{(?P<operator>(?:\^|&)(?:[^}]+?)?|\*|\*?(?:-\||[<>+?!])|~\|(?:[^}]+?)?|(?:[^}]+?)\^|[.,:;!?])\}",
    r"<a?:(?P<emoji>\w+):\d+>",
    r"(?P<raw>(?:\\\\|\\\{|[^{])+|\{)",
];

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = FORMS
        .iter()
        .map(|form| format!("(?:{})", form.replace("BODY", BODY)))
        .collect();
    Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("directive token pattern")
});

/// Scan `text` into directives, left to right.
///
/// Total: text that is not a recognizable directive comes back as
/// [`Directive::Text`].
pub fn lex(text: &str) -> Vec<Directive> {
    let mut scanner = Scanner::default();
    for caps in TOKEN.captures_iter(text) {
        scanner.feed(classify(&caps));
    }
    scanner.finish()
}

/// Drop the backslash from `\\`, `\{` and `\}`.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\\' | '{' | '}') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Tokens from one regex match.
struct Lexeme {
    tokens: Vec<Directive>,
    /// Literal that may complete a fusion with the pending token instead of
    /// being emitted.
    trigger: Option<String>,
}

impl Lexeme {
    fn of(tokens: Vec<Directive>) -> Self {
        Self {
            tokens,
            trigger: None,
        }
    }

    fn literal(text: String) -> Self {
        let trigger = (text.chars().count() == 1).then(|| text.clone());
        Self {
            tokens: vec![Directive::Text(text)],
            trigger,
        }
    }
}

#[derive(Default)]
struct Scanner {
    out: Vec<Directive>,
    pending: Option<Directive>,
    /// Set after a fancy-text meta fused into a mode on its own; the mode
    /// that usually follows it is dropped.
    absorbs_mode: bool,
}

impl Scanner {
    fn feed(&mut self, lexeme: Lexeme) {
        let absorbs_mode = std::mem::take(&mut self.absorbs_mode);

        if let (Some(pending), Some(trigger)) = (&self.pending, &lexeme.trigger) {
            if let Some(mode) = fuse_pair(pending, trigger) {
                self.pending = Some(Directive::mode(mode));
                return;
            }
        }
        if absorbs_mode && matches!(lexeme.tokens.as_slice(), [Directive::Mode(_)]) {
            return;
        }
        for token in lexeme.tokens {
            self.push(token);
        }
    }

    fn push(&mut self, token: Directive) {
        if let Some(prev) = self.pending.take() {
            self.out.push(prev);
        }
        self.pending = Some(match fuse_solo(&token) {
            Some(mode) => {
                self.absorbs_mode = true;
                Directive::mode(mode)
            }
            None => {
                self.absorbs_mode = false;
                token
            }
        });
    }

    fn finish(mut self) -> Vec<Directive> {
        self.out.extend(self.pending.take());
        self.out
    }
}

fn fancytext_set_arg(d: &Directive) -> Option<&str> {
    match d {
        Directive::Meta { name, args } if name == "fancytext_set" && args.len() == 1 => {
            Some(args[0].as_str())
        }
        _ => None,
    }
}

/// Mode a pending token turns into when followed by `trigger`.
fn fuse_pair(pending: &Directive, trigger: &str) -> Option<&'static str> {
    match (pending, trigger) {
        (Directive::Mode(m), "-") if m == "lower" => Some("kebab"),
        (d, "\u{3000}") if fancytext_set_arg(d) == Some("fullwidth") => Some("fullwidth"),
        _ => None,
    }
}

/// Mode a token turns into by itself.
fn fuse_solo(token: &Directive) -> Option<&'static str> {
    match fancytext_set_arg(token)? {
        "sarcasm" => Some("sarcasm"),
        "zalgo" => Some("zalgo"),
        "off" => Some("fancytext_off"),
        _ => None,
    }
}

fn split_args(args: Option<&str>, sep: char) -> Vec<String> {
    let Some(args) = args else {
        return Vec::new();
    };
    let parts: Vec<String> = args.split(sep).map(String::from).collect();
    // A lone separator splits into two empty halves.
    if parts.len() == 2 && parts.iter().all(String::is_empty) {
        vec![sep.to_string()]
    } else {
        parts
    }
}

fn operator(op: &str) -> Directive {
    if let Some((name, arg)) = OPERATOR_METAS.get(op) {
        Directive::meta(*name, [*arg])
    } else if let Some(name) = OPERATOR_MACROS.get(op) {
        Directive::Macro {
            name: name.to_string(),
            args: Vec::new(),
        }
    } else if let Some((name, arg)) = op.strip_prefix('*').and_then(|rest| OPERATOR_METAS.get(rest)) {
        Directive::meta(format!("retro_{name}"), [*arg])
    } else {
        Directive::Meta {
            name: op.to_string(),
            args: Vec::new(),
        }
    }
}

fn attached(marker: Directive, body: &str) -> Vec<Directive> {
    vec![marker, Directive::Text(unescape(body))]
}

fn classify(caps: &Captures<'_>) -> Lexeme {
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    if let Some(escaped) = group("escaped") {
        return Lexeme::literal(escaped[1..].to_string());
    }
    if group("space").is_some() {
        return Lexeme::of(vec![Directive::Space]);
    }
    if group("cancel").is_some() {
        return Lexeme::of(vec![Directive::Cancel]);
    }
    if group("noop").is_some() {
        return Lexeme::of(vec![Directive::Noop]);
    }
    if let Some(name) = group("macro_name") {
        let args = split_args(group("macro_args"), ',');
        return Lexeme::of(vec![Directive::Macro {
            name: name.to_string(),
            args,
        }]);
    }
    if let Some(command) = group("command") {
        return Lexeme::of(vec![Directive::Command(command.to_lowercase())]);
    }
    if let Some(space) = group("mode_space") {
        let space = unescape(space);
        return Lexeme {
            tokens: vec![Directive::ModeSpace, Directive::Text(space.clone())],
            trigger: Some(space),
        };
    }
    if let Some(mode) = group("mode") {
        return Lexeme::of(vec![Directive::Mode(mode.to_lowercase())]);
    }
    if let Some(glue) = group("glue") {
        let glue = unescape(glue);
        return Lexeme::of(vec![Directive::Glue(glue.clone()), Directive::Text(glue)]);
    }
    if let Some(body) = group("carry_cap_infix") {
        let mut tokens = attached(Directive::AttachInfix, body);
        tokens.push(Directive::CarryCap);
        return Lexeme::of(tokens);
    }
    if let Some(body) = group("carry_cap_suffix") {
        let mut tokens = attached(Directive::AttachSuffix, body);
        tokens.push(Directive::CarryCap);
        return Lexeme::of(tokens);
    }
    if let Some(body) = group("carry_cap_prefix") {
        let mut tokens = attached(Directive::AttachPrefix, body);
        tokens.push(Directive::CarryCap);
        return Lexeme::of(tokens);
    }
    if let Some(body) = group("carry_cap") {
        return Lexeme::of(vec![Directive::Text(unescape(body)), Directive::CarryCap]);
    }
    if group("attach_raw").is_some() {
        return Lexeme::of(attached(Directive::AttachRaw, ""));
    }
    if let Some(body) = group("attach_infix").or_else(|| group("attach_infix_2")) {
        return Lexeme::of(attached(Directive::AttachInfix, body));
    }
    if let Some(body) = group("attach_suffix") {
        return Lexeme::of(attached(Directive::AttachSuffix, body));
    }
    if let Some(body) = group("attach_prefix") {
        return Lexeme::of(attached(Directive::AttachPrefix, body));
    }
    if let Some(pre) = group("currency_pre") {
        let post = group("currency_post").unwrap_or_default();
        let mut tokens = Vec::with_capacity(3);
        if !pre.is_empty() {
            tokens.push(Directive::Text(unescape(pre)));
        }
        tokens.push(Directive::Currency);
        if !post.is_empty() {
            tokens.push(Directive::Text(unescape(post)));
        }
        return Lexeme::of(tokens);
    }
    if let Some(combo) = group("key_combo") {
        return Lexeme::of(
            key_combo::parse(combo)
                .into_iter()
                .map(Directive::KeyCombo)
                .collect(),
        );
    }
    if let Some(name) = group("meta_name") {
        let args = split_args(group("meta_args"), ':');
        return Lexeme::of(vec![Directive::Meta {
            name: name.to_lowercase(),
            args,
        }]);
    }
    if let Some(op) = group("operator") {
        return Lexeme::of(vec![operator(op)]);
    }
    if let Some(name) = group("emoji") {
        return Lexeme::of(vec![Directive::Emoji(name.to_string())]);
    }
    match group("raw") {
        Some(" ") => Lexeme::of(vec![Directive::Space]),
        Some(raw) => Lexeme::literal(unescape(raw)),
        None => Lexeme::of(Vec::new()),
    }
}
