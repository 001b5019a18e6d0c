use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<K> {
    key: K,
    deadline: Instant,
}

/// Cancellable single-slot timer.
///
/// Every `schedule` replaces the pending key and pushes the deadline to
/// `now + delay`; `poll` yields the key once, when the deadline has passed.
/// Time is always passed in, so callers decide what clock drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<K> {
    delay: Duration,
    pending: Option<Pending<K>>,
}

impl<K> Debouncer<K> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `key`. Returns `true` when a pending timer was replaced.
    pub fn schedule(&mut self, key: K, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            key,
            deadline: now + self.delay,
        });
        replaced
    }

    /// Drops the pending timer, returning its key.
    pub fn cancel(&mut self) -> Option<K> {
        self.pending.take().map(|pending| pending.key)
    }

    pub fn poll(&mut self, now: Instant) -> Option<K> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn pending_key(&self) -> Option<&K> {
        self.pending.as_ref().map(|pending| &pending.key)
    }
}
