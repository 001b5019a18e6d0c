//! Word frequency plugin runtime: host adapters around the pure core.
mod bus;
mod constants;
mod counter;
mod effects;
mod host;
mod settings;
mod view;

pub use bus::{FrequencyUpdate, Subscription, UpdateBus};
pub use constants::{EVENT_UPDATE, FILTER_DEBOUNCE, FREQUENCY_ICON, PLUGIN_NAME, VIEW_TYPE};
pub use counter::{resolve_source, FrequencyCounter, SourceResolution};
pub use effects::EffectRunner;
pub use host::{ChangeFeed, Clock, Focus, ManualClock, SourceError, SystemClock, TextSource};
pub use settings::{
    commit_settings, load_settings, save_blacklist, save_threshold, MemorySettingsStore, SettingsStore,
};
pub use view::{PanelRow, PanelView};

pub use wordfreq_core::{DocumentId, Tracking, CONTENT_DEBOUNCE};
pub use wordfreq_engine::{FrequencyList, Settings, SettingsError, WordCount};
