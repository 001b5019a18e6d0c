use std::time::Instant;

use crate::{DocumentId, Tracking};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterViewModel {
    pub tracking: Tracking,
    pub view_open: bool,
    pub watched: Vec<DocumentId>,
    /// Document whose debounced recompute is waiting, if any.
    pub pending: Option<DocumentId>,
    pub deadline: Option<Instant>,
}
