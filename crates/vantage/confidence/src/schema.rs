//! Schema seam: which entity types track confidence at all.

use std::collections::HashSet;

/// Supplied by the schema/type-registry collaborator: tells the controls
/// whether an entity type defines a confidence attribute. Types without one
/// (file artifacts, for instance) are never gated.
pub trait ConfidenceIndex {
    /// Whether `entity_type` defines a confidence attribute.
    fn has_confidence_field(&self, entity_type: &str) -> bool;
}

/// Set-backed index for embedders with a fixed schema, and for tests.
#[derive(Clone, Debug, Default)]
pub struct StaticConfidenceIndex {
    types: HashSet<String>,
}

impl StaticConfidenceIndex {
    /// Empty index: no type tracks confidence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity type as confidence-bearing.
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.types.insert(entity_type.into());
        self
    }
}

impl ConfidenceIndex for StaticConfidenceIndex {
    fn has_confidence_field(&self, entity_type: &str) -> bool {
        self.types.contains(entity_type)
    }
}
