//! Word frequency core: pure focus/debounce state machine.
mod debounce;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

use std::time::Duration;

pub use debounce::Debouncer;
pub use effect::Effect;
pub use msg::{FocusTarget, Msg};
pub use state::{CounterState, DocumentId, Tracking};
pub use update::update;
pub use view_model::CounterViewModel;

/// Quiet period after the last edit before counts are recomputed.
pub const CONTENT_DEBOUNCE: Duration = Duration::from_millis(1000);
