//! Configured confidence ceilings stored on users and groups.

use serde::{Deserialize, Serialize};

/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE_VALUE: u8 = 100;

/// Clamp an arbitrary caller-supplied number into the confidence scale.
pub fn crop_confidence(value: i64) -> u8 {
    value.clamp(0, MAX_CONFIDENCE_VALUE as i64) as u8
}

/// A confidence ceiling configured on a user or a group.
///
/// `max_confidence` bounds every entity type unless an override names the
/// type explicitly. This is the configuration shape persisted by the
/// identity layer; the evaluator derives its own resolved form from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceLevel {
    /// General ceiling applied to every entity type without an override.
    pub max_confidence: u8,

    /// Per-entity-type exceptions to the general ceiling.
    #[serde(default)]
    pub overrides: Vec<ConfidenceOverride>,
}

impl ConfidenceLevel {
    /// Create a level with no overrides.
    pub fn new(max_confidence: u8) -> Self {
        Self {
            max_confidence,
            overrides: Vec::new(),
        }
    }

    /// Add a per-entity-type override; `None` records "no override" for
    /// that type, which falls back to the general ceiling.
    pub fn with_override(
        mut self,
        entity_type: impl Into<String>,
        max_confidence: Option<u8>,
    ) -> Self {
        self.overrides.push(ConfidenceOverride {
            entity_type: entity_type.into(),
            max_confidence,
        });
        self
    }
}

/// Per-entity-type exception to a general confidence ceiling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceOverride {
    /// Entity type the override applies to.
    pub entity_type: String,

    /// Ceiling for that type; `None` means no override.
    pub max_confidence: Option<u8>,
}
