use std::sync::{mpsc, Arc};

use serde::Serialize;
use wordfreq_engine::FrequencyList;
use wordfreq_logging::wordfreq_debug;

use crate::EVENT_UPDATE;

/// Payload of every update notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyUpdate {
    pub word_counts: FrequencyList,
}

/// Receiving end of an [`UpdateBus`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    rx: mpsc::Receiver<Arc<FrequencyUpdate>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn try_recv(&self) -> Option<Arc<FrequencyUpdate>> {
        self.rx.try_recv().ok()
    }

    /// Drains queued updates and returns the newest one.
    pub fn latest(&self) -> Option<Arc<FrequencyUpdate>> {
        self.rx.try_iter().last()
    }

    pub fn close(self) {}
}

/// Typed fire-and-forget broadcast of frequency updates.
#[derive(Debug, Default)]
pub struct UpdateBus {
    next_id: u64,
    subscribers: Vec<(u64, mpsc::Sender<Arc<FrequencyUpdate>>)>,
}

impl UpdateBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.next_id += 1;
        let id = self.next_id;
        self.subscribers.push((id, tx));
        Subscription { id, rx }
    }

    /// Delivers `update` to live subscribers and prunes closed ones.
    /// Returns the number of deliveries.
    pub fn publish(&mut self, update: FrequencyUpdate) -> usize {
        let update = Arc::new(update);
        self.subscribers
            .retain(|(_, tx)| tx.send(Arc::clone(&update)).is_ok());
        let delivered = self.subscribers.len();
        wordfreq_debug!(
            "{} words={} delivered={}",
            EVENT_UPDATE,
            update.word_counts.len(),
            delivered
        );
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
