//! X11 keysym names for printable characters.
//!
//! Key combos name punctuation and Latin-1 letters by keysym (`{#shift(at)}`,
//! `{#aacute}`); the renderer shows the character instead.

use phf::phf_map;

pub static KEYNAME_TO_CHAR: phf::Map<&'static str, &'static str> = phf_map! {
    // ASCII punctuation
    "ampersand" => "&",
    "apostrophe" => "'",
    "asciicircum" => "^",
    "asciitilde" => "~",
    "asterisk" => "*",
    "at" => "@",
    "backslash" => "\\",
    "bar" => "|",
    "braceleft" => "{",
    "braceright" => "}",
    "bracketleft" => "[",
    "bracketright" => "]",
    "colon" => ":",
    "comma" => ",",
    "dollar" => "$",
    "equal" => "=",
    "exclam" => "!",
    "grave" => "`",
    "greater" => ">",
    "less" => "<",
    "minus" => "-",
    "numbersign" => "#",
    "parenleft" => "(",
    "parenright" => ")",
    "percent" => "%",
    "period" => ".",
    "plus" => "+",
    "question" => "?",
    "quotedbl" => "\"",
    "quoteleft" => "`",
    "quoteright" => "'",
    "semicolon" => ";",
    "slash" => "/",
    "underscore" => "_",
    // Latin-1 symbols
    "nobreakspace" => "\u{a0}",
    "exclamdown" => "¡",
    "cent" => "¢",
    "sterling" => "£",
    "currency" => "¤",
    "yen" => "¥",
    "brokenbar" => "¦",
    "section" => "§",
    "diaeresis" => "¨",
    "copyright" => "©",
    "ordfeminine" => "ª",
    "guillemotleft" => "«",
    "notsign" => "¬",
    "hyphen" => "\u{ad}",
    "registered" => "®",
    "macron" => "¯",
    "degree" => "°",
    "plusminus" => "±",
    "twosuperior" => "²",
    "threesuperior" => "³",
    "acute" => "´",
    "mu" => "µ",
    "paragraph" => "¶",
    "periodcentered" => "·",
    "cedilla" => "¸",
    "onesuperior" => "¹",
    "masculine" => "º",
    "guillemotright" => "»",
    "onequarter" => "¼",
    "onehalf" => "½",
    "threequarters" => "¾",
    "questiondown" => "¿",
    "multiply" => "×",
    "division" => "÷",
    "ssharp" => "ß",
    // Latin-1 letters; key combos arrive lowercased, so only the lowercase
    // forms are reachable.
    "agrave" => "à",
    "aacute" => "á",
    "acircumflex" => "â",
    "atilde" => "ã",
    "adiaeresis" => "ä",
    "aring" => "å",
    "ae" => "æ",
    "ccedilla" => "ç",
    "egrave" => "è",
    "eacute" => "é",
    "ecircumflex" => "ê",
    "ediaeresis" => "ë",
    "igrave" => "ì",
    "iacute" => "í",
    "icircumflex" => "î",
    "idiaeresis" => "ï",
    "eth" => "ð",
    "ntilde" => "ñ",
    "ograve" => "ò",
    "oacute" => "ó",
    "ocircumflex" => "ô",
    "otilde" => "õ",
    "odiaeresis" => "ö",
    "oslash" => "ø",
    "ugrave" => "ù",
    "uacute" => "ú",
    "ucircumflex" => "û",
    "udiaeresis" => "ü",
    "yacute" => "ý",
    "thorn" => "þ",
    "ydiaeresis" => "ÿ",
};
