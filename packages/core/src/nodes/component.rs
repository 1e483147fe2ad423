use std::{
    cell::{Cell, RefCell},
    fmt::Debug,
    rc::Rc,
};

use crate::innerlude::{ElementId, NodeRef, ScopeId, VNode};

/// The lifecycle surface of a stateful component.
///
/// Stateful components own their state between renders. The only lifecycle method the teardown path cares about is
/// [`Component::component_will_unmount`], which is called exactly once right before the component's rendered output is
/// torn down.
pub trait Component {
    /// Called once before the component's rendered output is removed.
    fn component_will_unmount(&mut self) {}
}

/// Hooks attached to a component from the outside.
///
/// Unlike [`Component`] methods, these are supplied by whoever rendered the component rather than the component itself.
#[derive(Clone, Default)]
pub struct ComponentHooks {
    on_component_will_unmount: Option<Rc<RefCell<dyn FnMut()>>>,
}

impl ComponentHooks {
    /// Create an empty hook bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` when the component is about to be unmounted
    pub fn on_component_will_unmount(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_component_will_unmount = Some(Rc::new(RefCell::new(f)));
        self
    }

    pub(crate) fn component_will_unmount(&self) {
        if let Some(hook) = &self.on_component_will_unmount {
            (hook.borrow_mut())();
        }
    }
}

impl Debug for ComponentHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentHooks")
            .field(
                "on_component_will_unmount",
                &self.on_component_will_unmount.is_some(),
            )
            .finish()
    }
}

/// A user-defined component in the tree.
///
/// Components are cheap to clone. Clones share the same instance, which is how the recycle pool can keep hold of a
/// component after its parent has dropped it.
#[derive(Clone)]
pub struct VComponent {
    inner: Rc<VComponentInner>,
}

struct VComponentInner {
    name: &'static str,
    key: Option<String>,
    id: ElementId,
    node_ref: Option<NodeRef>,
    hooks: Option<ComponentHooks>,
    instance: ComponentInstance,
    unmounted: Cell<bool>,
}

impl VComponent {
    /// Start building a component that owns the stateful instance `instance`
    pub fn stateful(name: &'static str, id: ElementId, instance: StatefulInstance) -> ComponentBuilder {
        ComponentBuilder::new(name, id, ComponentInstance::Stateful(instance))
    }

    /// Start building a function component that rendered `rendered`
    pub fn functional(name: &'static str, id: ElementId, rendered: VNode) -> ComponentBuilder {
        ComponentBuilder::new(name, id, ComponentInstance::Functional(Box::new(rendered)))
    }

    /// The name of the component, used for pooling and logging
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// The key of the component, if it has one
    pub fn key(&self) -> Option<&str> {
        self.inner.key.as_deref()
    }

    /// The host node the component rendered to
    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    /// The ref attached to the component
    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.inner.node_ref.as_ref()
    }

    /// The hooks attached to the component itself
    pub fn hooks(&self) -> Option<&ComponentHooks> {
        self.inner.hooks.as_ref()
    }

    /// The instance backing this component
    pub fn instance(&self) -> &ComponentInstance {
        &self.inner.instance
    }

    /// Returns true once teardown has started for this component
    pub fn is_unmounted(&self) -> bool {
        self.inner.unmounted.get()
    }

    pub(crate) fn mark_unmounted(&self) {
        self.inner.unmounted.set(true)
    }

    /// Clear the unmounted flags so a pooled component can be mounted and torn down again
    pub(crate) fn reset_lifecycle(&self) {
        self.inner.unmounted.set(false);
        if let ComponentInstance::Stateful(instance) = &self.inner.instance {
            instance.unmounted.set(false);
        }
    }

    /// The hooks that apply to this component: its own, falling back to the ones its instance carries.
    pub(crate) fn resolved_hooks(&self) -> Option<&ComponentHooks> {
        self.hooks().or_else(|| match self.instance() {
            ComponentInstance::Stateful(instance) => instance.hooks.as_ref(),
            ComponentInstance::Functional(_) => None,
        })
    }

    /// Returns true if both handles point to the same component
    pub fn ptr_eq(&self, other: &VComponent) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Builds a [`VComponent`] before it is shared with the rest of the tree.
pub struct ComponentBuilder {
    inner: VComponentInner,
}

impl ComponentBuilder {
    fn new(name: &'static str, id: ElementId, instance: ComponentInstance) -> Self {
        Self {
            inner: VComponentInner {
                name,
                key: None,
                id,
                node_ref: None,
                hooks: None,
                instance,
                unmounted: Cell::new(false),
            },
        }
    }

    /// Give the component a key
    pub fn key(mut self, key: impl ToString) -> Self {
        self.inner.key = Some(key.to_string());
        self
    }

    /// Attach a ref to the component
    pub fn node_ref(mut self, node_ref: impl Into<NodeRef>) -> Self {
        self.inner.node_ref = Some(node_ref.into());
        self
    }

    /// Attach hooks to the component
    pub fn hooks(mut self, hooks: ComponentHooks) -> Self {
        self.inner.hooks = Some(hooks);
        self
    }

    pub fn build(self) -> VComponent {
        VComponent {
            inner: Rc::new(self.inner),
        }
    }
}

impl From<ComponentBuilder> for VComponent {
    fn from(builder: ComponentBuilder) -> Self {
        builder.build()
    }
}

impl From<ComponentBuilder> for VNode {
    fn from(builder: ComponentBuilder) -> Self {
        VNode::Component(builder.build())
    }
}

impl Debug for VComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VComponent")
            .field("name", &self.inner.name)
            .field("key", &self.inner.key)
            .field("id", &self.inner.id)
            .field("instance", &self.inner.instance)
            .field("unmounted", &self.inner.unmounted.get())
            .finish()
    }
}

/// What sits behind a component.
///
/// Whether a component is stateful is decided when it is mounted, so teardown never has to inspect the instance.
#[derive(Debug)]
pub enum ComponentInstance {
    /// A component with its own state and lifecycle methods
    Stateful(StatefulInstance),

    /// A function component. The instance *is* the node it rendered.
    Functional(Box<VNode>),
}

impl ComponentInstance {
    /// The last node this instance rendered.
    ///
    /// Function components always have one; stateful components may not have rendered yet.
    pub fn last_input(&self) -> Option<&VNode> {
        match self {
            ComponentInstance::Stateful(instance) => instance.last_input(),
            ComponentInstance::Functional(rendered) => Some(rendered),
        }
    }
}

/// The state of a mounted stateful component.
pub struct StatefulInstance {
    scope: ScopeId,
    state: RefCell<Box<dyn Component>>,
    last_input: Option<VNode>,
    hooks: Option<ComponentHooks>,
    unmounted: Cell<bool>,
}

impl StatefulInstance {
    /// Wrap `state`, which is registered under `scope` and last rendered `last_input`
    pub fn new(scope: ScopeId, state: impl Component + 'static, last_input: Option<VNode>) -> Self {
        Self {
            scope,
            state: RefCell::new(Box::new(state)),
            last_input,
            hooks: None,
            unmounted: Cell::new(false),
        }
    }

    /// Attach hooks to the instance
    pub fn with_hooks(mut self, hooks: ComponentHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// The registry entry for this instance
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The last node this instance rendered
    pub fn last_input(&self) -> Option<&VNode> {
        self.last_input.as_ref()
    }

    /// Returns true once `component_will_unmount` has been called
    pub fn is_unmounted(&self) -> bool {
        self.unmounted.get()
    }

    pub(crate) fn will_unmount(&self) {
        self.state.borrow_mut().component_will_unmount();
        self.unmounted.set(true);
    }
}

impl Debug for StatefulInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatefulInstance")
            .field("scope", &self.scope)
            .field("last_input", &self.last_input)
            .field("hooks", &self.hooks)
            .field("unmounted", &self.unmounted.get())
            .finish()
    }
}
