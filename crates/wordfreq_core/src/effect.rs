use crate::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Subscribe to the document's content-change stream.
    WatchDocument { document: DocumentId },
    /// Read the document's current text, recount and publish.
    Recompute { document: DocumentId },
    /// Stop the change stream and drop the text accessor of a closed document.
    ReleaseDocument { document: DocumentId },
}
