use std::collections::BTreeSet;
use std::time::Duration;

use crate::view_model::CounterViewModel;
use crate::{Debouncer, CONTENT_DEBOUNCE};

pub type DocumentId = u64;

/// Which document the counter follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tracking {
    #[default]
    Idle,
    Tracking(DocumentId),
}

/// State owned by one counter instance.
///
/// The tracked document is the "last known active source": only a qualifying
/// focus change writes it, recomputes without an explicit source read it.
/// Closing that document returns the state to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    tracking: Tracking,
    view_open: bool,
    watched: BTreeSet<DocumentId>,
    debouncer: Debouncer<DocumentId>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::with_debounce(CONTENT_DEBOUNCE)
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(delay: Duration) -> Self {
        Self {
            tracking: Tracking::Idle,
            view_open: false,
            watched: BTreeSet::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn view(&self) -> CounterViewModel {
        CounterViewModel {
            tracking: self.tracking,
            view_open: self.view_open,
            watched: self.watched.iter().copied().collect(),
            pending: self.debouncer.pending_key().copied(),
            deadline: self.debouncer.deadline(),
        }
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }

    pub fn last_active(&self) -> Option<DocumentId> {
        match self.tracking {
            Tracking::Idle => None,
            Tracking::Tracking(document) => Some(document),
        }
    }

    pub fn is_view_open(&self) -> bool {
        self.view_open
    }

    pub(crate) fn track(&mut self, document: DocumentId) {
        self.tracking = Tracking::Tracking(document);
    }

    pub(crate) fn untrack(&mut self) {
        self.tracking = Tracking::Idle;
    }

    pub(crate) fn set_view_open(&mut self, open: bool) {
        self.view_open = open;
    }

    /// Marks `document` as watched. Returns `true` the first time only.
    pub(crate) fn watch(&mut self, document: DocumentId) -> bool {
        self.watched.insert(document)
    }

    pub(crate) fn unwatch(&mut self, document: DocumentId) -> bool {
        self.watched.remove(&document)
    }

    pub(crate) fn debouncer_mut(&mut self) -> &mut Debouncer<DocumentId> {
        &mut self.debouncer
    }
}
