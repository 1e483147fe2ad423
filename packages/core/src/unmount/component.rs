use crate::innerlude::{
    detach_ref, ComponentInstance, ElementId, Lifecycle, Runtime, UnmountError, VComponent, VNode,
    WriteMutations,
};

impl Runtime {
    pub(crate) fn unmount_component(
        &mut self,
        to: &mut impl WriteMutations,
        component: &VComponent,
        parent: Option<ElementId>,
        lifecycle: &mut Lifecycle,
        can_recycle: bool,
        shallow: bool,
    ) -> Result<(), UnmountError> {
        if component.is_unmounted() {
            tracing::warn!(
                name = component.name(),
                id = ?component.id(),
                "component was already unmounted, skipping"
            );
            return Ok(());
        }

        // Mark before any user code runs so re-entrant calls see it
        component.mark_unmounted();
        tracing::debug!(name = component.name(), ?parent, shallow, "unmounting component");

        if !shallow {
            detach_ref(component.node_ref())?;

            match component.instance() {
                ComponentInstance::Stateful(instance) => {
                    instance.will_unmount();
                    if self.registry.delete(instance.scope()).is_none() {
                        tracing::trace!(scope = %instance.scope(), "component was never registered");
                    }
                    if let Some(last_input) = instance.last_input() {
                        self.unmount(to, last_input, None, lifecycle, false, shallow)?;
                    }
                }
                ComponentInstance::Functional(rendered) => {
                    self.unmount(to, rendered, None, lifecycle, false, shallow)?;
                }
            }

            if let Some(hooks) = component.resolved_hooks() {
                hooks.component_will_unmount();
            }
        }

        if let Some(parent) = parent {
            match component.instance().last_input() {
                // The descendants are already gone; this pass only clears the fragment's own footprint
                Some(VNode::Fragment(fragment)) => {
                    self.unmount_fragment(to, fragment, Some(parent), true, lifecycle, true)?
                }
                _ => self.remove_leaf(to, Some(parent), component.id()),
            }
        }

        if !shallow && (parent.is_some() || can_recycle) {
            self.recycle(component);
        }

        Ok(())
    }

    fn recycle(&mut self, component: &VComponent) {
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        if pool.push(component.clone()) {
            tracing::debug!(name = component.name(), "returned component to the pool");
        } else {
            tracing::debug!(name = component.name(), "pool is full, dropping component");
        }
    }
}
