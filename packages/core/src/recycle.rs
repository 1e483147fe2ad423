use rustc_hash::FxHashMap;

use crate::innerlude::VComponent;

/// Torn-down components kept around so the mount path can reuse them.
///
/// Components are grouped by name and key. Each group holds at most `capacity` components. Anything past that is
/// dropped.
#[derive(Debug)]
pub struct RecyclePool {
    capacity: usize,
    pools: FxHashMap<PoolKey, Vec<VComponent>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PoolKey {
    name: &'static str,
    key: Option<String>,
}

impl RecyclePool {
    /// Create a pool that keeps up to `capacity` components per name and key
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pools: FxHashMap::default(),
        }
    }

    /// Return a torn-down component to the pool.
    ///
    /// Returns false if the pool for this component is already full and the component was dropped.
    pub fn push(&mut self, component: VComponent) -> bool {
        let key = PoolKey {
            name: component.name(),
            key: component.key().map(ToString::to_string),
        };
        let pool = self.pools.entry(key).or_default();
        if pool.len() >= self.capacity {
            return false;
        }
        pool.push(component);
        true
    }

    /// Take a pooled component with the given name and key, most recently pooled first.
    ///
    /// The component comes back ready to be mounted again: its unmounted flags are cleared.
    pub fn take(&mut self, name: &'static str, key: Option<&str>) -> Option<VComponent> {
        let key = PoolKey {
            name,
            key: key.map(ToString::to_string),
        };
        let component = self.pools.get_mut(&key)?.pop()?;
        component.reset_lifecycle();
        Some(component)
    }

    /// The number of components pooled across every name and key
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every pooled component
    pub fn clear(&mut self) {
        self.pools.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innerlude::{ElementId, VNode};

    fn component(name: &'static str, key: Option<&str>) -> VComponent {
        let builder = VComponent::functional(name, ElementId(1), VNode::text("hi", ElementId(1)));
        match key {
            Some(key) => builder.key(key).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn pools_are_split_by_name_and_key() {
        let mut pool = RecyclePool::new(4);
        assert!(pool.push(component("Row", Some("a"))));
        assert!(pool.push(component("Row", None)));

        assert!(pool.take("Row", Some("b")).is_none());
        assert_eq!(pool.take("Row", Some("a")).unwrap().key(), Some("a"));
        assert!(pool.take("Row", None).is_some());
        assert!(pool.is_empty());
    }

    #[test]
    fn full_pools_drop_components() {
        let mut pool = RecyclePool::new(1);
        assert!(pool.push(component("Row", None)));
        assert!(!pool.push(component("Row", None)));
        assert_eq!(pool.len(), 1);

        pool.clear();
        assert!(pool.is_empty());
    }
}
