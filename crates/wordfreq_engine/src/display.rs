use std::collections::HashSet;

use crate::frequency::WordCount;
use crate::settings::Settings;

/// Set of tokens hidden from the panel. Counting is never affected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blacklist {
    words: HashSet<String>,
}

impl Blacklist {
    /// Parses a comma-separated list; entries are trimmed and blanks ignored.
    pub fn parse(raw: &str) -> Self {
        let words = raw
            .split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Presentation-time configuration applied on top of a computed list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub blacklist: Blacklist,
    pub threshold: u32,
    pub filter: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings, filter: impl Into<String>) -> Self {
        Self {
            blacklist: Blacklist::parse(&settings.blacklist),
            threshold: settings.threshold,
            filter: filter.into(),
        }
    }

    pub fn is_visible(&self, entry: &WordCount) -> bool {
        if self.blacklist.contains(&entry.word) || entry.count < self.threshold {
            return false;
        }
        self.filter.is_empty()
            || entry
                .word
                .to_lowercase()
                .contains(&self.filter.to_lowercase())
    }
}

/// Entries of `list` that pass `options`, in list order.
pub fn visible<'a>(list: &'a [WordCount], options: &DisplayOptions) -> Vec<&'a WordCount> {
    list.iter().filter(|entry| options.is_visible(entry)).collect()
}

pub fn threshold_label(threshold: u32) -> String {
    format!("Current frequency threshold is {threshold}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_parse_trims_and_skips_blanks() {
        let blacklist = Blacklist::parse(" the, and ,,a ,");
        assert_eq!(blacklist.len(), 3);
        assert!(blacklist.contains("the"));
        assert!(blacklist.contains("and"));
        assert!(blacklist.contains("a"));
        assert!(!blacklist.contains(""));
    }

    #[test]
    fn empty_blacklist_string_hides_nothing() {
        assert!(Blacklist::parse("").is_empty());
    }

    #[test]
    fn threshold_label_mentions_value() {
        assert_eq!(threshold_label(3), "Current frequency threshold is 3.");
    }
}
