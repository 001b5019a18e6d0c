use std::time::Duration;

pub const PLUGIN_NAME: &str = "Word frequency";
pub const VIEW_TYPE: &str = "word-frequency-view";
pub const EVENT_UPDATE: &str = "word-frequency-update";
pub const FREQUENCY_ICON: &str = "file-chart-column-increasing";

/// Delay between the last keystroke in the filter box and re-filtering.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(500);
