//! Tearing down committed trees.
//!
//! Every unmounter takes an optional `parent`. When it is set, the node's own host footprint is detached from it. When it
//! is `None`, an ancestor's removal already takes the node out of the host tree, so only the callback side of teardown
//! runs (refs, lifecycle methods, hooks). Children are always visited before their parent is detached.
//!
//! Unmounting is one-shot. A component remembers that it was unmounted and a second attempt on it is skipped, but
//! nothing else in a tree carries such a marker, so callers must never unmount the same tree twice.

use crate::innerlude::{ElementId, Lifecycle, Runtime, UnmountError, VNode, WriteMutations};

mod component;
mod element;
mod fragment;

impl Runtime {
    /// Tear down `node` and everything under it.
    ///
    /// - `parent`: the host node `node` is attached to, or `None` if an ancestor's removal takes care of it
    /// - `lifecycle`: the commit's deferred callbacks, passed through untouched
    /// - `can_recycle`: whether components torn down here may go to the recycle pool even without a `parent`
    /// - `shallow`: only remove `node`'s own footprint, skipping refs, hooks and children
    pub fn unmount(
        &mut self,
        to: &mut impl WriteMutations,
        node: &VNode,
        parent: Option<ElementId>,
        lifecycle: &mut Lifecycle,
        can_recycle: bool,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        tracing::trace!(kind = ?node.kind(), ?parent, shallow, "unmounting node");
        match node {
            VNode::Component(component) => {
                self.unmount_component(to, component, parent, lifecycle, can_recycle, shallow)
            }
            VNode::Element(element) => self.unmount_element(to, element, parent, lifecycle, shallow),
            VNode::Fragment(fragment) => {
                self.unmount_fragment(to, fragment, parent, true, lifecycle, shallow)
            }
            VNode::Text(text) => {
                self.remove_leaf(to, parent, text.id);
                Ok(())
            }
            VNode::Placeholder(placeholder) => {
                self.remove_leaf(to, parent, placeholder.id);
                Ok(())
            }
            // Nothing to do for kinds we don't know about yet
            VNode::Reserved(tag) => {
                tracing::trace!(tag, "skipping reserved node kind");
                Ok(())
            }
        }
    }

    /// Tear down a list of siblings that all live directly under `parent`, in order
    pub fn unmount_all(
        &mut self,
        to: &mut impl WriteMutations,
        nodes: &[VNode],
        parent: Option<ElementId>,
        lifecycle: &mut Lifecycle,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        for node in nodes {
            self.unmount(to, node, parent, lifecycle, false, shallow)?;
        }
        Ok(())
    }

    /// Detach a single host node, if there is a parent to detach it from
    pub(crate) fn remove_leaf(
        &mut self,
        to: &mut impl WriteMutations,
        parent: Option<ElementId>,
        id: ElementId,
    ) {
        if let Some(parent) = parent {
            tracing::trace!(?parent, child = ?id, "removing node");
            to.remove_node(parent, id);
        }
    }
}
