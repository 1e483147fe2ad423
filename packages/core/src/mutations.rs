//! The host-tree side of teardown.
//!
//! The crate never owns the live document. Everything it wants to do to it goes through [`WriteMutations`], which
//! renderers implement on top of their own node storage.

use crate::innerlude::ElementId;

/// Something that can apply teardown edits to a host tree.
///
/// Callers guarantee that `child` is currently hosted by `parent`. Passing a child that is not contained in the parent
/// is a bug in the caller, and implementations are free to panic on it.
pub trait WriteMutations {
    /// Detach `child` from `parent`'s list of hosted children.
    fn remove_node(&mut self, parent: ElementId, child: ElementId);
}

impl<W: WriteMutations + ?Sized> WriteMutations for &mut W {
    fn remove_node(&mut self, parent: ElementId, child: ElementId) {
        (**self).remove_node(parent, child)
    }
}

/// A `WriteMutations` implementation that does nothing.
///
/// Useful when tearing down a tree whose host nodes are already gone, e.g. after the whole document was dropped.
pub struct NoOpMutations;

impl WriteMutations for NoOpMutations {
    fn remove_node(&mut self, _parent: ElementId, _child: ElementId) {}
}

/// A single edit recorded by [`Mutations`].
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mutation {
    /// Detach `child` from `parent`.
    RemoveNode {
        /// The host node that hosted `child`
        parent: ElementId,
        /// The host node that was detached
        child: ElementId,
    },
}

/// A list of edits, in the order they were issued.
///
/// Interpreters that can't apply edits synchronously can collect them here and replay them later. Tests use it to
/// check exactly which host mutations a teardown produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Mutations {
    /// The edits that were issued.
    pub edits: Vec<Mutation>,
}

impl Mutations {
    /// Create an empty list of edits
    pub fn new() -> Self {
        Self::default()
    }

    /// The ids of every node that was detached, in order
    pub fn removed(&self) -> Vec<ElementId> {
        self.edits
            .iter()
            .map(|edit| match edit {
                Mutation::RemoveNode { child, .. } => *child,
            })
            .collect()
    }
}

impl WriteMutations for Mutations {
    fn remove_node(&mut self, parent: ElementId, child: ElementId) {
        self.edits.push(Mutation::RemoveNode { parent, child })
    }
}
