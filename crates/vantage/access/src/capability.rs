//! Capabilities granted to users by the access-control layer.

use serde::{Deserialize, Serialize};

/// Capability granting unrestricted trust: a holder may write any
/// confidence value, regardless of configured levels.
pub const BYPASS: &str = "BYPASS";

/// A named permission held by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Well-known capability name.
    pub name: String,
}

impl Capability {
    /// Create a capability by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
