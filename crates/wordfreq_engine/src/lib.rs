//! Word frequency engine: segmentation, aggregation and presentation filtering.
mod display;
mod frequency;
mod segment;
mod settings;

pub use display::{threshold_label, visible, Blacklist, DisplayOptions};
pub use frequency::{
    calculate_frequencies, calculate_frequencies_with, count_tokens, total_occurrences,
    FrequencyList, WordCount,
};
pub use segment::{is_separator, segment, Segmenter, UnicodeSegmenter};
pub use settings::{Settings, SettingsError, DEFAULT_BLACKLIST, DEFAULT_THRESHOLD};
