use std::{fmt::Debug, rc::Rc};

use crate::innerlude::{ElementId, UnmountError};

/// A reference attached to a node.
///
/// Refs are how user code gets hold of the host node an element or component rendered to. While the node is mounted the
/// callback receives `Some(id)`; when it is torn down the callback receives `None`.
#[derive(Clone)]
pub enum NodeRef {
    /// A callback that is told when the host node comes and goes.
    Callback(Rc<dyn Fn(Option<ElementId>)>),

    /// A string ref.
    ///
    /// String refs are not supported. They can only come from boundaries the type system can't check (templates loaded
    /// at runtime, interpreted markup) and any attempt to detach one fails with [`UnmountError::UnsupportedRef`].
    Named(Rc<str>),
}

impl NodeRef {
    /// Create a callback ref
    pub fn callback(f: impl Fn(Option<ElementId>) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Create a string ref from an unchecked source.
    pub fn named(name: impl Into<Rc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Tell the ref that its node is gone.
    pub(crate) fn detach(&self) -> Result<(), UnmountError> {
        match self {
            NodeRef::Callback(callback) => {
                callback(None);
                Ok(())
            }
            NodeRef::Named(name) => Err(UnmountError::UnsupportedRef {
                name: name.to_string(),
            }),
        }
    }
}

/// Detach an optional ref. A missing ref is a no-op.
pub(crate) fn detach_ref(node_ref: Option<&NodeRef>) -> Result<(), UnmountError> {
    match node_ref {
        Some(node_ref) => node_ref.detach(),
        None => Ok(()),
    }
}

impl Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRef::Callback(_) => f.write_str("NodeRef::Callback"),
            NodeRef::Named(name) => f.debug_tuple("NodeRef::Named").field(name).finish(),
        }
    }
}

impl<F: Fn(Option<ElementId>) + 'static> From<F> for NodeRef {
    fn from(f: F) -> Self {
        Self::callback(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn callback_refs_receive_none() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let node_ref = NodeRef::callback({
            let seen = seen.clone();
            move |id| seen.borrow_mut().push(id)
        });

        node_ref.detach().unwrap();
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn missing_refs_are_ignored() {
        assert!(detach_ref(None).is_ok());
    }

    #[test]
    fn named_refs_fail() {
        let err = NodeRef::named("input").detach().unwrap_err();
        assert_eq!(
            err,
            UnmountError::UnsupportedRef {
                name: "input".to_string()
            }
        );
    }
}
