/// Callbacks deferred until the current commit has finished.
///
/// The commit phase owns this queue. Teardown only carries it through to nested calls so that every layer sees the same
/// queue; it never reads or runs the callbacks itself.
#[derive(Default)]
pub struct Lifecycle {
    listeners: Vec<Box<dyn FnOnce()>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `listener` to run once the commit finishes
    pub fn add_listener(&mut self, listener: impl FnOnce() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Run every queued listener in the order it was added, leaving the queue empty
    pub fn trigger(&mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener();
        }
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn listeners_run_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut lifecycle = Lifecycle::new();

        for i in 0..3 {
            let order = order.clone();
            lifecycle.add_listener(move || order.borrow_mut().push(i));
        }

        assert_eq!(lifecycle.len(), 3);
        lifecycle.trigger();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(lifecycle.is_empty());
    }
}
