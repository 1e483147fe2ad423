//! The rendered virtual tree.
//!
//! Every node here was produced by the mount path and points at the host nodes it rendered to. Teardown only reads the
//! tree and flips the lifecycle flags that live behind `Cell`s.

mod component;
mod element;
mod fragment;
mod text;

pub use component::*;
pub use element::*;
pub use fragment::*;
pub use text::*;

use crate::innerlude::ElementId;

/// A node in the rendered tree.
#[derive(Clone, Debug)]
pub enum VNode {
    /// An element with its own host node
    Element(VElement),

    /// A user-defined component
    Component(VComponent),

    /// A group of siblings sharing one anchor
    Fragment(VFragment),

    /// A text node
    Text(VText),

    /// An empty slot, backed by a hidden host node
    Placeholder(VPlaceholder),

    /// A node kind this version of the engine doesn't know how to tear down.
    ///
    /// Renderers may stash their own node kinds here. Unmounting one is a no-op.
    Reserved(u32),
}

/// The kind of a [`VNode`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Component,
    Fragment,
    Text,
    Placeholder,
    Reserved,
}

impl VNode {
    /// Create a text node that lives at `id`
    pub fn text(value: impl ToString, id: ElementId) -> Self {
        VNode::Text(VText::new(value, id))
    }

    /// Create a placeholder that lives at `id`
    pub fn placeholder(id: ElementId) -> Self {
        VNode::Placeholder(VPlaceholder::new(id))
    }

    /// Create a fragment anchored at `anchor`
    pub fn fragment(anchor: ElementId, children: impl IntoIterator<Item = VNode>) -> Self {
        VNode::Fragment(VFragment::new(anchor, children))
    }

    /// The kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            VNode::Element(_) => NodeKind::Element,
            VNode::Component(_) => NodeKind::Component,
            VNode::Fragment(_) => NodeKind::Fragment,
            VNode::Text(_) => NodeKind::Text,
            VNode::Placeholder(_) => NodeKind::Placeholder,
            VNode::Reserved(_) => NodeKind::Reserved,
        }
    }
}

impl From<VElement> for VNode {
    fn from(el: VElement) -> Self {
        VNode::Element(el)
    }
}

impl From<VComponent> for VNode {
    fn from(comp: VComponent) -> Self {
        VNode::Component(comp)
    }
}

impl From<VFragment> for VNode {
    fn from(frag: VFragment) -> Self {
        VNode::Fragment(frag)
    }
}

impl From<VText> for VNode {
    fn from(text: VText) -> Self {
        VNode::Text(text)
    }
}

impl From<VPlaceholder> for VNode {
    fn from(placeholder: VPlaceholder) -> Self {
        VNode::Placeholder(placeholder)
    }
}
