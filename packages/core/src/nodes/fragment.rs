use crate::innerlude::{ElementId, VNode};

/// A group of sibling nodes with no container of their own.
///
/// The host tree only sees the children and a hidden anchor node that marks where the fragment lives. The anchor is
/// owned by the fragment and is always the last thing removed when the fragment goes away.
#[derive(Clone, Debug)]
pub struct VFragment {
    /// The children, in document order
    pub children: Vec<VNode>,

    /// The anchor marking the fragment's position
    pub anchor: ElementId,
}

impl VFragment {
    /// Create a fragment anchored at `anchor`
    pub fn new(anchor: ElementId, children: impl IntoIterator<Item = VNode>) -> Self {
        Self {
            children: children.into_iter().collect(),
            anchor,
        }
    }
}
