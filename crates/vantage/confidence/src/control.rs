//! Write-gating controls applied by the mutation layer before persisting.

use tracing::debug;
use vantage_access::{AuthUser, ConfidenceObject};

use crate::error::{ConfidenceError, Result, WriteOperation};
use crate::level::{compute_user_effective_confidence_level, EffectiveConfidenceLevel};
use crate::schema::ConfidenceIndex;

/// Confidence value to persist on a newly created element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateConfidenceOutcome {
    /// Requested confidence capped at the user's applicable ceiling; the
    /// ceiling itself when the caller supplied none.
    pub confidence_level_to_apply: u8,
}

/// Outcome of gating an upsert (create-or-update merge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpsertConfidenceOutcome {
    /// The incoming payload is trusted enough to be merged over the
    /// existing element.
    pub is_confidence_match: bool,

    /// Confidence value to persist, capped at the user's ceiling.
    pub confidence_level_to_apply: u8,

    /// The applied value should replace the stored confidence.
    pub is_confidence_upper: bool,
}

fn effective_level_or(user: &AuthUser, operation: WriteOperation) -> Result<EffectiveConfidenceLevel> {
    compute_user_effective_confidence_level(user)
        .ok_or(ConfidenceError::NoEffectiveConfidenceLevel { operation })
}

/// Gate an update against an existing element.
///
/// Entity types whose schema defines no confidence attribute are always
/// permitted; the user's level is not consulted for them. An element that
/// carries no confidence is permitted as well, since there is nothing to
/// compare against.
pub fn control_user_confidence_against_element<T: ConfidenceObject>(
    schema: &dyn ConfidenceIndex,
    user: &AuthUser,
    element: &T,
) -> Result<()> {
    if !schema.has_confidence_field(element.entity_type()) {
        return Ok(());
    }

    let level = effective_level_or(user, WriteOperation::Update)?;
    let Some(element_confidence) = element.confidence() else {
        return Ok(());
    };

    let max_confidence = level.max_confidence_for(element.entity_type());
    if element_confidence > max_confidence {
        debug!(
            user = %user.id,
            entity_type = element.entity_type(),
            element_confidence,
            max_confidence,
            "confidence control denied update"
        );
        return Err(ConfidenceError::InsufficientConfidenceLevel {
            max_confidence,
            element_confidence,
        });
    }
    Ok(())
}

/// Non-raising form of [`control_user_confidence_against_element`], for
/// callers where a denial is an expected outcome rather than an error to
/// surface.
pub fn user_confidence_allows_element<T: ConfidenceObject>(
    schema: &dyn ConfidenceIndex,
    user: &AuthUser,
    element: &T,
) -> bool {
    control_user_confidence_against_element(schema, user, element).is_ok()
}

/// Gate a create and choose the confidence value to persist.
///
/// Creation always requires an effective level, since there is no prior
/// value to fall back to. `entity_type`, when given, supersedes the input's
/// own type for override resolution; create inputs do not always carry a
/// final type yet.
pub fn control_create_input_with_user_confidence<T: ConfidenceObject>(
    user: &AuthUser,
    input: &T,
    entity_type: Option<&str>,
) -> Result<CreateConfidenceOutcome> {
    let level = effective_level_or(user, WriteOperation::Create)?;
    let max_confidence = level.max_confidence_for(entity_type.unwrap_or_else(|| input.entity_type()));
    let confidence_level_to_apply = input
        .confidence()
        .map_or(max_confidence, |c| c.min(max_confidence));
    Ok(CreateConfidenceOutcome {
        confidence_level_to_apply,
    })
}

/// Gate an upsert, reconciling the incoming payload against the existing
/// element. The applicable ceiling is resolved against the incoming
/// element's type.
pub fn control_upsert_input_with_user_confidence<I, E>(
    user: &AuthUser,
    incoming: &I,
    existing: &E,
) -> Result<UpsertConfidenceOutcome>
where
    I: ConfidenceObject,
    E: ConfidenceObject,
{
    let level = effective_level_or(user, WriteOperation::Upsert)?;
    let max_confidence = level.max_confidence_for(incoming.entity_type());
    let confidence_level_to_apply = incoming
        .confidence()
        .map_or(max_confidence, |c| c.min(max_confidence));

    // The applied value wins the merge when it reaches the existing
    // confidence; an element without one is always dominated.
    let wins_merge = existing
        .confidence()
        .map_or(true, |c| confidence_level_to_apply >= c);

    Ok(UpsertConfidenceOutcome {
        is_confidence_match: wins_merge,
        confidence_level_to_apply,
        is_confidence_upper: wins_merge,
    })
}
