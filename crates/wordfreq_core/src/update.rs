use wordfreq_logging::{wordfreq_debug, wordfreq_trace};

use crate::{CounterState, DocumentId, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CounterState, msg: Msg) -> (CounterState, Vec<Effect>) {
    let effects = match msg {
        Msg::FocusChanged(target) => match target.document() {
            Some(document) => focus_document(&mut state, document),
            None => {
                // Non-editor focus leaves the tracked document in place.
                wordfreq_trace!("focus moved to a non-editor surface ({:?})", target);
                Vec::new()
            }
        },
        Msg::ContentChanged { document, at } => {
            let replaced = state.debouncer_mut().schedule(document, at);
            wordfreq_trace!("content changed document={} replaced={}", document, replaced);
            Vec::new()
        }
        Msg::Tick { now } => match state.debouncer_mut().poll(now) {
            Some(document) => vec![Effect::Recompute { document }],
            None => Vec::new(),
        },
        Msg::RefreshRequested => recompute_last_active(&state),
        Msg::ViewOpened => {
            state.set_view_open(true);
            recompute_last_active(&state)
        }
        Msg::ViewClosed => {
            state.set_view_open(false);
            Vec::new()
        }
        Msg::DocumentClosed { document } => close_document(&mut state, document),
    };

    (state, effects)
}

fn focus_document(state: &mut CounterState, document: DocumentId) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);

    if state.watch(document) {
        effects.push(Effect::WatchDocument { document });
    }

    let pending_elsewhere = state
        .debouncer_mut()
        .pending_key()
        .is_some_and(|&pending| pending != document);
    if pending_elsewhere {
        let dropped = state.debouncer_mut().cancel();
        wordfreq_debug!("dropped pending recompute for {:?} on focus change", dropped);
    }

    state.track(document);

    if state.is_view_open() {
        effects.push(Effect::Recompute { document });
    }
    effects
}

fn close_document(state: &mut CounterState, document: DocumentId) -> Vec<Effect> {
    if state.debouncer_mut().pending_key() == Some(&document) {
        state.debouncer_mut().cancel();
    }
    if state.last_active() == Some(document) {
        state.untrack();
    }

    if state.unwatch(document) {
        wordfreq_debug!("released closed document={}", document);
        vec![Effect::ReleaseDocument { document }]
    } else {
        Vec::new()
    }
}

fn recompute_last_active(state: &CounterState) -> Vec<Effect> {
    match state.last_active() {
        Some(document) => vec![Effect::Recompute { document }],
        None => Vec::new(),
    }
}
