//! Effective confidence level, derived per request from a user's own
//! setting, group memberships, and capabilities.

use std::collections::HashMap;

use tracing::debug;
use vantage_access::{
    AuthUser, ConfidenceLevel, ConfidenceOverride, Group, BYPASS, MAX_CONFIDENCE_VALUE,
};

/// Which setting produced an effective level.
///
/// Carries the originating object so callers can report which user or group
/// configuration applied.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelSource {
    /// The user's own configured level.
    User(AuthUser),

    /// The most permissive level among the user's groups.
    Group(Group),

    /// The bypass capability: unrestricted trust.
    Bypass,
}

/// A user's resolved confidence ceiling.
///
/// Derived on demand and never persisted: group memberships and
/// capabilities can change between requests, so every control recomputes
/// this from a fresh user snapshot. Overrides are resolved into a map at
/// construction, with entries carrying no ceiling already dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfidenceLevel {
    /// General ceiling for entity types without an override.
    pub max_confidence: u8,

    /// Per-entity-type ceilings.
    pub overrides: HashMap<String, u8>,

    /// Which setting produced this level.
    pub source: LevelSource,
}

impl EffectiveConfidenceLevel {
    fn from_configured(configured: &ConfidenceLevel, source: LevelSource) -> Self {
        Self {
            max_confidence: configured.max_confidence,
            overrides: resolve_overrides(&configured.overrides),
            source,
        }
    }

    fn bypass() -> Self {
        Self {
            max_confidence: MAX_CONFIDENCE_VALUE,
            overrides: HashMap::new(),
            source: LevelSource::Bypass,
        }
    }

    /// Ceiling applicable to one entity type: its override when one exists,
    /// otherwise the general maximum.
    pub fn max_confidence_for(&self, entity_type: &str) -> u8 {
        self.overrides
            .get(entity_type)
            .copied()
            .unwrap_or(self.max_confidence)
    }
}

fn resolve_overrides(overrides: &[ConfidenceOverride]) -> HashMap<String, u8> {
    overrides
        .iter()
        .filter_map(|o| o.max_confidence.map(|max| (o.entity_type.clone(), max)))
        .collect()
}

/// Compute the user's effective confidence level.
///
/// Precedence, strictly ordered:
/// 1. the bypass capability grants the full scale and wins over any
///    configured level;
/// 2. an explicit user-level setting wins over groups;
/// 3. among graded groups, the highest ceiling applies, the first group
///    encountered winning ties.
///
/// Returns `None` when nothing grants a level, in which case the user
/// cannot write confidence-bearing elements at all.
pub fn compute_user_effective_confidence_level(user: &AuthUser) -> Option<EffectiveConfidenceLevel> {
    if user.has_capability(BYPASS) {
        return Some(EffectiveConfidenceLevel::bypass());
    }

    if let Some(level) = &user.user_confidence_level {
        return Some(EffectiveConfidenceLevel::from_configured(
            level,
            LevelSource::User(user.clone()),
        ));
    }

    let mut best: Option<(&Group, &ConfidenceLevel)> = None;
    for group in &user.groups {
        let Some(level) = group.group_confidence_level.as_ref() else {
            continue;
        };
        match best {
            Some((_, current)) if current.max_confidence >= level.max_confidence => {}
            _ => best = Some((group, level)),
        }
    }

    let effective = best.map(|(group, level)| {
        EffectiveConfidenceLevel::from_configured(level, LevelSource::Group(group.clone()))
    });
    if effective.is_none() {
        debug!(user = %user.id, "user has no effective confidence level");
    }
    effective
}
