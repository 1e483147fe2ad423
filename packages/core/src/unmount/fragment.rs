use crate::innerlude::{ElementId, Lifecycle, Runtime, UnmountError, VFragment, VNode, WriteMutations};

impl Runtime {
    /// Tear down a fragment.
    ///
    /// `remove_anchor` is false when an ancestor is about to clear the fragment's whole range anyway and will deal with
    /// the anchor itself.
    pub(crate) fn unmount_fragment(
        &mut self,
        to: &mut impl WriteMutations,
        fragment: &VFragment,
        parent: Option<ElementId>,
        remove_anchor: bool,
        lifecycle: &mut Lifecycle,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        if !shallow {
            for child in &fragment.children {
                match child {
                    // Nested anchors always go, no matter how this fragment is being torn down
                    VNode::Fragment(inner) => {
                        self.unmount_fragment(to, inner, parent, true, lifecycle, false)?
                    }
                    child => self.unmount(to, child, None, lifecycle, false, shallow)?,
                }
            }
        }

        if remove_anchor {
            self.remove_leaf(to, parent, fragment.anchor);
        }
        Ok(())
    }
}
