/// An Element's unique identifier.
///
/// `ElementId` is a `usize` that is unique across the entire host tree. It is a weak handle: the host owns the node it
/// names, and once an id has been handed to [`crate::WriteMutations::remove_node`] it must not be used again.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl ElementId {
    /// The id of the root of the host tree
    pub const ROOT: ElementId = ElementId(0);
}

/// A component instance's unique identifier.
///
/// Handed out by the [`crate::ComponentRegistry`] when a stateful component is mounted and released exactly once when
/// that component is torn down.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ScopeId(pub usize);

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}
