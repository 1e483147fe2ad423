use slab::Slab;

use crate::innerlude::{ElementId, ScopeId};

/// Maps stateful component instances to the host node they rendered.
///
/// The mount path registers an instance when it first renders. Teardown deletes the entry exactly once, before the
/// instance's output is torn down.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    nodes: Slab<ElementId>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new instance that rendered `element`
    pub fn register(&mut self, element: ElementId) -> ScopeId {
        ScopeId(self.nodes.insert(element))
    }

    /// Point an existing instance at a new host node
    pub fn update(&mut self, scope: ScopeId, element: ElementId) -> bool {
        match self.nodes.get_mut(scope.0) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    /// The host node `scope` rendered to
    pub fn get(&self, scope: ScopeId) -> Option<ElementId> {
        self.nodes.get(scope.0).copied()
    }

    /// Remove the entry for `scope`, returning the host node it pointed at
    pub fn delete(&mut self, scope: ScopeId) -> Option<ElementId> {
        self.nodes.try_remove(scope.0)
    }

    pub fn contains(&self, scope: ScopeId) -> bool {
        self.nodes.contains(scope.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_only_succeeds_once() {
        let mut registry = ComponentRegistry::new();
        let scope = registry.register(ElementId(4));

        assert_eq!(registry.get(scope), Some(ElementId(4)));
        assert_eq!(registry.delete(scope), Some(ElementId(4)));
        assert_eq!(registry.delete(scope), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn update_moves_an_entry() {
        let mut registry = ComponentRegistry::new();
        let scope = registry.register(ElementId(1));

        assert!(registry.update(scope, ElementId(2)));
        assert_eq!(registry.get(scope), Some(ElementId(2)));
        assert!(!registry.update(ScopeId(99), ElementId(3)));
    }
}
