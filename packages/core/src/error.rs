/// An error raised while tearing down a tree.
///
/// Teardown stops at the node that raised it, so nodes later in the walk are left mounted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnmountError {
    /// A string ref was found on a node. Only callback refs are supported.
    #[error("{}", unsupported_ref_message(.name))]
    UnsupportedRef { name: String },
}

#[cfg(debug_assertions)]
fn unsupported_ref_message(name: &str) -> String {
    format!("string refs are not supported (found ref {name:?}). Use callback refs instead.")
}

#[cfg(not(debug_assertions))]
fn unsupported_ref_message(_name: &str) -> String {
    "unsupported ref".to_string()
}

/// An error raised while loading a [`crate::RuntimeConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid runtime config in ${var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_point_at_callback_refs() {
        let err = UnmountError::UnsupportedRef {
            name: "input".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("\"input\""));
        assert!(message.contains("callback refs"));
    }
}
