#![doc = include_str!("../README.md")]

mod arena;
mod config;
mod error;
mod lifecycle;
mod mutations;
mod node_ref;
mod nodes;
mod recycle;
mod registry;
mod runtime;
mod unmount;

pub(crate) mod innerlude {
    pub use crate::arena::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::lifecycle::*;
    pub use crate::mutations::*;
    pub(crate) use crate::node_ref::detach_ref;
    pub use crate::node_ref::NodeRef;
    pub use crate::nodes::*;
    pub use crate::recycle::*;
    pub use crate::registry::*;
    pub use crate::runtime::*;
}

pub use crate::innerlude::{
    Children, Component, ComponentBuilder, ComponentHooks, ComponentInstance, ComponentRegistry,
    ConfigError, ElementId, Lifecycle, Mutation, Mutations, NoOpMutations, NodeKind, NodeRef,
    RecyclePool, RecyclingConfig, Runtime, RuntimeConfig, ScopeId, StatefulInstance, UnmountError,
    VComponent, VElement, VFragment, VNode, VPlaceholder, VText, WriteMutations,
    RUNTIME_CONFIG_ENV,
};

/// The most common types, for glob imports in renderers and tests
pub mod prelude {
    pub use crate::innerlude::{
        Children, Component, ComponentHooks, ElementId, Lifecycle, Mutation, Mutations, NodeRef,
        Runtime, RuntimeConfig, ScopeId, StatefulInstance, UnmountError, VComponent, VElement,
        VFragment, VNode, WriteMutations,
    };
}
