use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;
use wordfreq_core::{DocumentId, FocusTarget};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("document {0} is no longer open")]
    Closed(DocumentId),
    #[error("failed to read document {document}: {message}")]
    Read {
        document: DocumentId,
        message: String,
    },
}

/// Accessor for the text of one editable document.
pub trait TextSource: Send + Sync {
    fn id(&self) -> DocumentId;
    fn text(&self) -> Result<String, SourceError>;
}

/// Host hook that starts forwarding content changes of a document to
/// [`crate::FrequencyCounter::handle_content_change`].
pub trait ChangeFeed: Send + Sync {
    fn watch(&self, document: DocumentId);
    fn unwatch(&self, document: DocumentId);
}

/// The surface the host reports as newly focused.
#[derive(Clone)]
pub enum Focus {
    None,
    Other,
    Editor(Arc<dyn TextSource>),
}

impl Focus {
    pub(crate) fn target(&self) -> FocusTarget {
        match self {
            Focus::None => FocusTarget::None,
            Focus::Other => FocusTarget::Other,
            Focus::Editor(source) => FocusTarget::Editor(source.id()),
        }
    }
}

impl fmt::Debug for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::None => write!(f, "None"),
            Focus::Other => write!(f, "Other"),
            Focus::Editor(source) => write!(f, "Editor({})", source.id()),
        }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
