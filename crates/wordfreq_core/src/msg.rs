use std::time::Instant;

use crate::DocumentId;

/// The surface that received focus, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Focus left every surface.
    None,
    /// A surface that is not a text editor (graph, settings, image, ...).
    Other,
    /// A text editor showing the given document.
    Editor(DocumentId),
}

impl FocusTarget {
    pub fn document(self) -> Option<DocumentId> {
        match self {
            FocusTarget::Editor(document) => Some(document),
            FocusTarget::None | FocusTarget::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host focus moved.
    FocusChanged(FocusTarget),
    /// A watched document was edited at `at`.
    ContentChanged { document: DocumentId, at: Instant },
    /// Timer hook; fires the debounced recompute once it is due.
    Tick { now: Instant },
    /// Recompute from the last known document without an explicit source.
    RefreshRequested,
    /// The panel was mounted.
    ViewOpened,
    /// The panel was unmounted.
    ViewClosed,
    /// The document's editor went away; forget everything held for it.
    DocumentClosed { document: DocumentId },
}
