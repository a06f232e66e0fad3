//! Storage-layer objects gated by confidence control.

use serde::{Deserialize, Serialize};

/// Surface the evaluator needs from any domain object: its entity type and
/// its optional confidence attribute.
///
/// Store records, create inputs, and upsert payloads all implement this so
/// the controls stay agnostic of how the object layer models them.
pub trait ConfidenceObject {
    /// Entity type name, as registered in the platform schema.
    fn entity_type(&self) -> &str;

    /// Confidence attribute, when the object carries one.
    fn confidence(&self) -> Option<u8>;
}

/// Minimal owned element, for callers holding loose objects and for tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Object identifier.
    pub id: String,

    /// Entity type name.
    pub entity_type: String,

    /// Optional confidence attribute.
    pub confidence: Option<u8>,
}

impl Element {
    /// Create an element with no confidence.
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            confidence: None,
        }
    }

    /// Set the element's confidence.
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

impl ConfidenceObject for Element {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn confidence(&self) -> Option<u8> {
        self.confidence
    }
}
