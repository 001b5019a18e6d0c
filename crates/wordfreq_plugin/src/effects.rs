use std::collections::HashMap;
use std::sync::Arc;

use wordfreq_core::{DocumentId, Effect};
use wordfreq_engine::{calculate_frequencies_with, Segmenter};
use wordfreq_logging::{wordfreq_debug, wordfreq_error, wordfreq_warn};

use crate::bus::{FrequencyUpdate, Subscription, UpdateBus};
use crate::host::{ChangeFeed, SourceError, TextSource};

/// Executes core effects against the host: document registry, change feed and update bus.
pub struct EffectRunner {
    documents: HashMap<DocumentId, Arc<dyn TextSource>>,
    feed: Arc<dyn ChangeFeed>,
    segmenter: Arc<dyn Segmenter>,
    bus: UpdateBus,
    closed: Vec<DocumentId>,
}

impl EffectRunner {
    pub fn new(feed: Arc<dyn ChangeFeed>, segmenter: Arc<dyn Segmenter>) -> Self {
        Self {
            documents: HashMap::new(),
            feed,
            segmenter,
            bus: UpdateBus::new(),
            closed: Vec::new(),
        }
    }

    /// Remembers the accessor for a focused document. A newer handle replaces an older one.
    pub fn register(&mut self, source: Arc<dyn TextSource>) {
        self.documents.insert(source.id(), source);
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.bus.subscribe()
    }

    /// Documents whose reads reported [`SourceError::Closed`] since the last call.
    pub fn take_closed(&mut self) -> Vec<DocumentId> {
        std::mem::take(&mut self.closed)
    }

    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::WatchDocument { document } => {
                    wordfreq_debug!("watching document={}", document);
                    self.feed.watch(document);
                }
                Effect::Recompute { document } => match self.documents.get(&document) {
                    Some(source) => {
                        let source = Arc::clone(source);
                        self.recompute(source.as_ref());
                    }
                    None => {
                        wordfreq_warn!("recompute requested for unknown document={}", document);
                    }
                },
                Effect::ReleaseDocument { document } => {
                    wordfreq_debug!("releasing document={}", document);
                    self.documents.remove(&document);
                    self.feed.unwatch(document);
                }
            }
        }
    }

    /// Reads `source` now, recounts and publishes.
    ///
    /// Returns `false` when nothing was published; the previous list stays current.
    pub fn recompute(&mut self, source: &dyn TextSource) -> bool {
        let document = source.id();
        let text = match source.text() {
            Ok(text) => text,
            Err(err) => {
                wordfreq_error!("error during update: document={} {}", document, err);
                if matches!(err, SourceError::Closed(_)) && !self.closed.contains(&document) {
                    self.closed.push(document);
                }
                return false;
            }
        };

        let word_counts = calculate_frequencies_with(self.segmenter.as_ref(), &text);
        wordfreq_debug!(
            "recomputed document={} chars={} distinct={}",
            document,
            text.chars().count(),
            word_counts.len()
        );
        self.bus.publish(FrequencyUpdate { word_counts });
        true
    }
}
