use crate::innerlude::{
    detach_ref, Children, ElementId, Lifecycle, Runtime, UnmountError, VElement, WriteMutations,
};

impl Runtime {
    pub(crate) fn unmount_element(
        &mut self,
        to: &mut impl WriteMutations,
        element: &VElement,
        parent: Option<ElementId>,
        lifecycle: &mut Lifecycle,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        if !shallow {
            detach_ref(element.node_ref.as_ref())?;
            self.unmount_children(to, &element.children, lifecycle, shallow)?;
        }

        // The element takes its whole subtree with it
        self.remove_leaf(to, parent, element.id);
        Ok(())
    }

    /// Children are never detached one by one; their element is removed as a unit.
    fn unmount_children(
        &mut self,
        to: &mut impl WriteMutations,
        children: &Children,
        lifecycle: &mut Lifecycle,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        for child in children.nodes() {
            self.unmount(to, child, None, lifecycle, false, shallow)?;
        }
        Ok(())
    }
}
