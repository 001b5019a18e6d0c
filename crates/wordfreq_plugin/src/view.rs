use std::sync::Arc;

use wordfreq_core::Debouncer;
use wordfreq_engine::{threshold_label, visible, DisplayOptions, Settings, SettingsError, WordCount};
use wordfreq_logging::wordfreq_debug;

use crate::bus::Subscription;
use crate::counter::FrequencyCounter;
use crate::host::Clock;
use crate::settings::{commit_settings, save_threshold, SettingsStore};
use crate::{FILTER_DEBOUNCE, PLUGIN_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub word: String,
    pub count: u32,
}

/// Side-panel view model: the latest published list plus display settings.
///
/// Blacklist, threshold and filter only change which rows are shown; the
/// received counts are never altered.
pub struct PanelView {
    subscription: Subscription,
    word_counts: Vec<WordCount>,
    settings: Settings,
    options: DisplayOptions,
    filter_input: Debouncer<String>,
    clock: Arc<dyn Clock>,
}

impl PanelView {
    /// Mounts the panel: subscribes, then asks the counter for the current document.
    pub fn open(counter: &mut FrequencyCounter, settings: Settings) -> Self {
        let subscription = counter.subscribe();
        counter.open_view();

        let options = DisplayOptions::from_settings(&settings, "");
        let mut view = Self {
            subscription,
            word_counts: Vec::new(),
            settings,
            options,
            filter_input: Debouncer::new(FILTER_DEBOUNCE),
            clock: counter.clock(),
        };
        view.sync();
        view
    }

    /// Unmounts the panel; later publishes no longer reach it.
    pub fn close(self, counter: &mut FrequencyCounter) {
        counter.close_view();
        self.subscription.close();
    }

    /// Takes the newest published list, if any arrived. Returns `true` on change.
    pub fn sync(&mut self) -> bool {
        match self.subscription.latest() {
            Some(update) => {
                self.word_counts = update.word_counts.clone();
                true
            }
            None => false,
        }
    }

    /// Records filter box input; applied by [`PanelView::poll`] after a pause.
    pub fn input_filter(&mut self, text: impl Into<String>) {
        self.filter_input.schedule(text.into(), self.clock.now());
    }

    /// Applies pending filter input and pulls new lists. Returns `true` when
    /// the rows may have changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = self.sync();
        if let Some(filter) = self.filter_input.poll(self.clock.now()) {
            wordfreq_debug!("filter applied: {:?}", filter);
            self.options.filter = filter;
            changed = true;
        }
        changed
    }

    pub fn rows(&self) -> Vec<PanelRow> {
        visible(&self.word_counts, &self.options)
            .into_iter()
            .map(|entry| PanelRow {
                word: entry.word.clone(),
                count: entry.count,
            })
            .collect()
    }

    pub fn word_counts(&self) -> &[WordCount] {
        &self.word_counts
    }

    pub fn filter(&self) -> &str {
        &self.options.filter
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn title(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn threshold_label(&self) -> String {
        threshold_label(self.settings.threshold)
    }

    /// Hides `word` from now on and persists the blacklist.
    pub fn blacklist_word(
        &mut self,
        word: &str,
        store: &mut dyn SettingsStore,
    ) -> Result<bool, SettingsError> {
        let mut next = self.settings.clone();
        if !next.blacklist_word(word) {
            return Ok(false);
        }
        commit_settings(&mut self.settings, next, store)?;
        self.refresh_options();
        Ok(true)
    }

    pub fn update_threshold(
        &mut self,
        input: &str,
        store: &mut dyn SettingsStore,
    ) -> Result<u32, SettingsError> {
        let threshold = save_threshold(&mut self.settings, input, store)?;
        self.refresh_options();
        Ok(threshold)
    }

    /// Adopts settings changed elsewhere (e.g. the settings tab).
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.refresh_options();
    }

    fn refresh_options(&mut self) {
        let filter = std::mem::take(&mut self.options.filter);
        self.options = DisplayOptions::from_settings(&self.settings, filter);
    }
}
