//! Users and groups as assembled by the identity/session layer.

use crate::capability::Capability;
use crate::confidence::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// A user group, optionally carrying a group-wide confidence ceiling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub id: String,

    /// Confidence ceiling granted by membership, if the group has one.
    pub group_confidence_level: Option<ConfidenceLevel>,
}

impl Group {
    /// Create a group with no confidence level.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_confidence_level: None,
        }
    }

    /// Set the group's confidence level.
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.group_confidence_level = Some(level);
        self
    }
}

/// A resolved user as supplied per request by the session layer.
///
/// Group memberships and capabilities are snapshots reloaded on every
/// request; the evaluator never caches anything derived from them across
/// calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// User identifier.
    pub id: String,

    /// Explicit per-user confidence ceiling, taking precedence over any
    /// group-granted one.
    pub user_confidence_level: Option<ConfidenceLevel>,

    /// Groups the user belongs to.
    pub groups: Vec<Group>,

    /// Capabilities granted by the access-control layer.
    pub capabilities: Vec<Capability>,
}

impl AuthUser {
    /// Create a user with no level, groups, or capabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_confidence_level: None,
            groups: Vec::new(),
            capabilities: Vec::new(),
        }
    }

    /// Set the user's own confidence level.
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.user_confidence_level = Some(level);
        self
    }

    /// Add a group membership.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Grant a capability by name.
    pub fn with_capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.push(Capability::new(name));
        self
    }

    /// Whether the user holds the named capability.
    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::BYPASS;

    #[test]
    fn user_builder_assembles_a_snapshot() {
        let user = AuthUser::new("jdoe")
            .with_confidence_level(ConfidenceLevel::new(30))
            .with_group(Group::new("analysts"))
            .with_capability(BYPASS);

        assert_eq!(user.id, "jdoe");
        assert_eq!(user.user_confidence_level.as_ref().unwrap().max_confidence, 30);
        assert_eq!(user.groups.len(), 1);
        assert!(user.has_capability(BYPASS));
        assert!(!user.has_capability("KNOWLEDGE_UPDATE"));
    }

    #[test]
    fn group_level_is_optional() {
        assert!(Group::new("readers").group_confidence_level.is_none());

        let graded = Group::new("analysts").with_confidence_level(ConfidenceLevel::new(70));
        assert_eq!(graded.group_confidence_level.unwrap().max_confidence, 70);
    }
}
