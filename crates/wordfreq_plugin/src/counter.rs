use std::sync::Arc;
use std::time::Duration;

use wordfreq_core::{update, CounterState, DocumentId, Msg, CONTENT_DEBOUNCE};
use wordfreq_engine::{calculate_frequencies_with, FrequencyList, Segmenter, UnicodeSegmenter};
use wordfreq_logging::{wordfreq_debug, wordfreq_info};

use crate::bus::Subscription;
use crate::effects::EffectRunner;
use crate::host::{ChangeFeed, Clock, Focus, SystemClock, TextSource};

/// Where a recompute without guaranteed input reads its text from.
#[derive(Clone, Copy)]
pub enum SourceResolution<'a> {
    /// The caller handed over a source.
    Explicit(&'a dyn TextSource),
    /// Fall back to the document recorded by the last qualifying focus change.
    LastKnown(DocumentId),
    /// Nothing to read; the update is skipped.
    Unavailable,
}

pub fn resolve_source<'a>(
    explicit: Option<&'a dyn TextSource>,
    last_known: Option<DocumentId>,
) -> SourceResolution<'a> {
    match (explicit, last_known) {
        (Some(source), _) => SourceResolution::Explicit(source),
        (None, Some(document)) => SourceResolution::LastKnown(document),
        (None, None) => SourceResolution::Unavailable,
    }
}

/// Host-facing word counter: tracks the active document, debounces edits and
/// publishes recomputed lists to subscribers.
///
/// All methods are meant to be called from the host's single event thread.
pub struct FrequencyCounter {
    state: CounterState,
    runner: EffectRunner,
    clock: Arc<dyn Clock>,
}

impl FrequencyCounter {
    pub fn new(feed: Arc<dyn ChangeFeed>) -> Self {
        Self::with_parts(
            feed,
            Arc::new(SystemClock),
            Arc::new(UnicodeSegmenter),
            CONTENT_DEBOUNCE,
        )
    }

    pub fn with_parts(
        feed: Arc<dyn ChangeFeed>,
        clock: Arc<dyn Clock>,
        segmenter: Arc<dyn Segmenter>,
        debounce: Duration,
    ) -> Self {
        wordfreq_info!("word frequency counter ready (debounce {:?})", debounce);
        Self {
            state: CounterState::with_debounce(debounce),
            runner: EffectRunner::new(feed, segmenter),
            clock,
        }
    }

    pub fn calculate_frequencies(&self, text: &str) -> FrequencyList {
        calculate_frequencies_with(self.runner.segmenter(), text)
    }

    /// Recomputes and publishes now.
    ///
    /// Without `source` the last known document is used; with neither this is
    /// a silent no-op. Read failures are logged and nothing is published.
    pub fn trigger_update(&mut self, source: Option<&dyn TextSource>) {
        match resolve_source(source, self.state.last_active()) {
            SourceResolution::Explicit(source) => {
                self.runner.recompute(source);
                self.release_closed();
            }
            SourceResolution::LastKnown(document) => {
                wordfreq_debug!("update falls back to last known document={}", document);
                self.dispatch(Msg::RefreshRequested);
            }
            SourceResolution::Unavailable => {
                wordfreq_debug!("update skipped: no active document");
            }
        }
    }

    pub fn handle_focus_change(&mut self, focus: Focus) {
        let target = focus.target();
        if let Focus::Editor(source) = focus {
            self.runner.register(source);
        }
        self.dispatch(Msg::FocusChanged(target));
    }

    /// Records an edit; the recompute runs once edits pause for the debounce delay.
    pub fn handle_content_change(&mut self, document: DocumentId) {
        let at = self.clock.now();
        self.dispatch(Msg::ContentChanged { document, at });
    }

    /// Timer hook. Runs the debounced recompute if it is due.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        self.dispatch(Msg::Tick { now });
    }

    /// Drops everything held for `document`: its accessor, change stream and
    /// pending recompute. A tracked document falls back to no active document.
    pub fn forget_document(&mut self, document: DocumentId) {
        self.dispatch(Msg::DocumentClosed { document });
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.runner.subscribe()
    }

    pub fn open_view(&mut self) {
        self.dispatch(Msg::ViewOpened);
    }

    pub fn close_view(&mut self) {
        self.dispatch(Msg::ViewClosed);
    }

    pub fn last_active(&self) -> Option<DocumentId> {
        self.state.last_active()
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        self.release_closed();
    }

    fn release_closed(&mut self) {
        for document in self.runner.take_closed() {
            wordfreq_info!("document={} closed", document);
            self.dispatch(Msg::DocumentClosed { document });
        }
    }
}
