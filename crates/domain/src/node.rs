//! Node identifier — the name a simulated device reports itself under.

use std::fmt;

use serde::Serialize;

/// Identifier used when `NODE_ID` is not configured.
pub const DEFAULT_NODE_ID: &str = "rpi-unknown";

/// Identifier of the simulated node (e.g. `rpi-01`).
///
/// Any string is accepted, including the empty string; it is reported
/// verbatim. Serialized as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_ID)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
