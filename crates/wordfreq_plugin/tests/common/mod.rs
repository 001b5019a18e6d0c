#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use wordfreq_engine::UnicodeSegmenter;
use wordfreq_plugin::{
    ChangeFeed, DocumentId, FrequencyCounter, ManualClock, SourceError, TextSource, WordCount,
};

pub const DELAY: Duration = Duration::from_millis(300);

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordfreq_logging::initialize_for_tests);
}

/// Editable in-memory document standing in for a host editor.
pub struct Document {
    id: DocumentId,
    text: Mutex<String>,
    reads: Mutex<usize>,
    broken: Mutex<bool>,
    closed: Mutex<bool>,
}

impl Document {
    pub fn new(id: DocumentId, text: &str) -> Arc<Self> {
        Arc::new(Self {
            id,
            text: Mutex::new(text.to_string()),
            reads: Mutex::new(0),
            broken: Mutex::new(false),
            closed: Mutex::new(false),
        })
    }

    pub fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    pub fn break_reads(&self) {
        *self.broken.lock().unwrap() = true;
    }

    pub fn close(&self) {
        *self.closed.lock().unwrap() = true;
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl TextSource for Document {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn text(&self) -> Result<String, SourceError> {
        *self.reads.lock().unwrap() += 1;
        if *self.closed.lock().unwrap() {
            return Err(SourceError::Closed(self.id));
        }
        if *self.broken.lock().unwrap() {
            return Err(SourceError::Read {
                document: self.id,
                message: "editor detached".into(),
            });
        }
        Ok(self.text.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct RecordingFeed {
    watched: Mutex<Vec<DocumentId>>,
    unwatched: Mutex<Vec<DocumentId>>,
}

impl RecordingFeed {
    pub fn watched(&self) -> Vec<DocumentId> {
        self.watched.lock().unwrap().clone()
    }

    pub fn unwatched(&self) -> Vec<DocumentId> {
        self.unwatched.lock().unwrap().clone()
    }
}

impl ChangeFeed for RecordingFeed {
    fn watch(&self, document: DocumentId) {
        self.watched.lock().unwrap().push(document);
    }

    fn unwatch(&self, document: DocumentId) {
        self.unwatched.lock().unwrap().push(document);
    }
}

pub struct Harness {
    pub counter: FrequencyCounter,
    pub clock: ManualClock,
    pub feed: Arc<RecordingFeed>,
}

pub fn harness() -> Harness {
    init_logging();
    let clock = ManualClock::new();
    let feed = Arc::new(RecordingFeed::default());
    let counter = FrequencyCounter::with_parts(
        feed.clone(),
        Arc::new(clock.clone()),
        Arc::new(UnicodeSegmenter),
        DELAY,
    );
    Harness {
        counter,
        clock,
        feed,
    }
}

pub fn pairs(list: &[WordCount]) -> Vec<(String, u32)> {
    list.iter()
        .map(|entry| (entry.word.clone(), entry.count))
        .collect()
}
