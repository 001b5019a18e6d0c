use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Splits document text into normalized word tokens.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Lowercase, NFKC, strip everything but letters/numbers/whitespace, split on whitespace.
///
/// Scripts written without spaces (Chinese, Japanese, Thai, ...) are not
/// word-segmented: each whitespace-delimited run becomes a single token.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        segment(text)
    }
}

/// Token separators: tab, line and form controls, the `Zs`/`Zl`/`Zp`
/// characters and U+FEFF.
///
/// Unlike `char::is_whitespace` this excludes U+0085 (NEL), which is stripped
/// as a control character instead.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn non_word_chars() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    // General categories L* and N*; marks (Mn/Mc/Me) are not kept. The
    // separator set mirrors `is_separator`.
    NON_WORD.get_or_init(|| {
        Regex::new(
            r"[^\p{L}\p{N}\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
        )
        .expect("static pattern compiles")
    })
}

/// Segments `text` into tokens in left-to-right order.
pub fn segment(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized: String = text.to_lowercase().nfkc().collect();
    let stripped = non_word_chars().replace_all(&normalized, "");

    stripped
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
