use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segment::{Segmenter, UnicodeSegmenter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Word counts sorted by count descending; ties keep first-seen order.
pub type FrequencyList = Vec<WordCount>;

/// Folds tokens into counts and sorts them.
///
/// The table is rebuilt from scratch on every call.
pub fn count_tokens<I, S>(tokens: I) -> FrequencyList
where
    I: IntoIterator<Item = S>,
    S: Into<String> + AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: FrequencyList = Vec::new();

    for token in tokens {
        match index.get(token.as_ref()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                let word: String = token.into();
                index.insert(word.clone(), counts.len());
                counts.push(WordCount::new(word, 1));
            }
        }
    }

    // `sort_by` is stable, which keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn calculate_frequencies(text: &str) -> FrequencyList {
    calculate_frequencies_with(&UnicodeSegmenter, text)
}

pub fn calculate_frequencies_with(segmenter: &dyn Segmenter, text: &str) -> FrequencyList {
    if text.is_empty() {
        return Vec::new();
    }
    count_tokens(segmenter.segment(text))
}

/// Sum of all counts in `list`.
pub fn total_occurrences(list: &[WordCount]) -> u64 {
    list.iter().map(|entry| u64::from(entry.count)).sum()
}
