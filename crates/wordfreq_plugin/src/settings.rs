use wordfreq_engine::{Settings, SettingsError};
use wordfreq_logging::{wordfreq_info, wordfreq_warn};

/// Host persistence for [`Settings`].
pub trait SettingsStore {
    fn load(&self) -> Result<Settings, SettingsError>;
    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError>;
}

/// In-memory store keeping the serialized form, as a host data file would.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    raw: Option<String>,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        match &self.raw {
            Some(raw) => Settings::from_json(raw),
            None => Ok(Settings::default()),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        self.raw = Some(settings.to_json()?);
        self.saves += 1;
        Ok(())
    }
}

/// Loads settings, falling back to defaults when the stored copy is unusable.
pub fn load_settings(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(settings) => settings,
        Err(err) => {
            wordfreq_warn!("Failed to load settings, using defaults: {}", err);
            Settings::default()
        }
    }
}

/// Persists `next` and adopts it. A failed save leaves `settings` untouched.
pub fn commit_settings(
    settings: &mut Settings,
    next: Settings,
    store: &mut dyn SettingsStore,
) -> Result<(), SettingsError> {
    store.save(&next)?;
    *settings = next;
    Ok(())
}

/// Replaces the blacklist text and persists it.
pub fn save_blacklist(
    settings: &mut Settings,
    raw: &str,
    store: &mut dyn SettingsStore,
) -> Result<(), SettingsError> {
    let next = Settings {
        blacklist: raw.to_string(),
        ..settings.clone()
    };
    commit_settings(settings, next, store)
}

/// Parses and stores a new threshold. Invalid input or a failed save leaves
/// everything untouched.
pub fn save_threshold(
    settings: &mut Settings,
    input: &str,
    store: &mut dyn SettingsStore,
) -> Result<u32, SettingsError> {
    let threshold = Settings::parse_threshold(input)?;
    let next = Settings {
        threshold,
        ..settings.clone()
    };
    commit_settings(settings, next, store)?;
    wordfreq_info!("threshold set to {}", threshold);
    Ok(threshold)
}
