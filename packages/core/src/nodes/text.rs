use crate::innerlude::ElementId;

/// A text node rendered into the host tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VText {
    /// The text content of the node
    pub value: String,

    /// The host node this text was written into
    pub id: ElementId,
}

impl VText {
    /// Create a new text node that lives at `id`
    pub fn new(value: impl ToString, id: ElementId) -> Self {
        Self {
            value: value.to_string(),
            id,
        }
    }
}

/// An empty slot in the tree.
///
/// Placeholders render to a hidden host node so that later renders have a place to insert content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VPlaceholder {
    /// The hidden host node standing in for this slot
    pub id: ElementId,
}

impl VPlaceholder {
    /// Create a placeholder that lives at `id`
    pub fn new(id: ElementId) -> Self {
        Self { id }
    }
}
