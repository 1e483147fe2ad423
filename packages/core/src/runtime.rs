use crate::innerlude::{ComponentRegistry, ConfigError, RecyclePool, RuntimeConfig};

/// The state teardown needs beyond the tree itself.
///
/// A runtime owns the component registry and, when recycling is enabled, the recycle pool. The mount path fills both;
/// teardown drains them. There is no global state: every runtime is independent, which is what lets tests swap in a
/// fresh one per case.
#[derive(Debug)]
pub struct Runtime {
    pub(crate) registry: ComponentRegistry,
    pub(crate) pool: Option<RecyclePool>,
    config: RuntimeConfig,
}

impl Runtime {
    /// Create a runtime with the given settings
    pub fn new(config: RuntimeConfig) -> Self {
        let pool = config
            .recycling
            .enabled
            .then(|| RecyclePool::new(config.recycling.capacity));

        Self {
            registry: ComponentRegistry::new(),
            pool,
            config,
        }
    }

    /// Create a runtime from [`RuntimeConfig::from_env`], falling back to the defaults if nothing was passed down
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(RuntimeConfig::from_env()?.unwrap_or_default()))
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// The recycle pool, if recycling is enabled
    pub fn pool(&self) -> Option<&RecyclePool> {
        self.pool.as_ref()
    }

    pub fn pool_mut(&mut self) -> Option<&mut RecyclePool> {
        self.pool.as_mut()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}
