use crate::innerlude::{ElementId, NodeRef, VNode};

/// An element in the host tree, like a `div` or an `input`.
#[derive(Clone, Debug)]
pub struct VElement {
    /// The tag name of the element
    pub tag: &'static str,

    /// The host node this element rendered to
    pub id: ElementId,

    /// The ref attached to this element, if any
    pub node_ref: Option<NodeRef>,

    /// Whatever the element renders inside itself
    pub children: Children,
}

impl VElement {
    /// Create an element with no ref and no children
    pub fn new(tag: &'static str, id: ElementId) -> Self {
        Self {
            tag,
            id,
            node_ref: None,
            children: Children::None,
        }
    }

    /// Attach a ref to this element
    pub fn with_ref(mut self, node_ref: impl Into<NodeRef>) -> Self {
        self.node_ref = Some(node_ref.into());
        self
    }

    /// Set the children of this element
    pub fn with_children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into();
        self
    }
}

/// The contents of an element.
///
/// The shape is only known once the element has been rendered, so teardown resolves it each time.
#[derive(Clone, Debug, Default)]
pub enum Children {
    /// The element is empty
    #[default]
    None,

    /// The element's text content was set directly. There is no node behind it.
    Text(String),

    /// Exactly one child node
    Single(Box<VNode>),

    /// An ordered list of children. `None` entries are holes (`false`, `null`, etc.) that rendered nothing.
    List(Vec<Option<VNode>>),
}

impl Children {
    /// Iterate over the child nodes that actually exist
    pub fn nodes(&self) -> impl Iterator<Item = &VNode> {
        let (single, list) = match self {
            Children::None | Children::Text(_) => (None, &[][..]),
            Children::Single(node) => (Some(&**node), &[][..]),
            Children::List(list) => (None, &list[..]),
        };
        single.into_iter().chain(list.iter().flatten())
    }
}

impl From<VNode> for Children {
    fn from(node: VNode) -> Self {
        Children::Single(Box::new(node))
    }
}

impl From<Vec<VNode>> for Children {
    fn from(nodes: Vec<VNode>) -> Self {
        Children::List(nodes.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<VNode>>> for Children {
    fn from(nodes: Vec<Option<VNode>>) -> Self {
        Children::List(nodes)
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}
