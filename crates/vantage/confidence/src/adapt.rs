//! Adaptation of raw field-patch inputs before they reach the store.

use serde::{Deserialize, Serialize};
use vantage_access::{crop_confidence, AuthUser, ConfidenceObject};

use crate::error::{ConfidenceError, Result, WriteOperation};
use crate::level::compute_user_effective_confidence_level;

/// Attribute key carrying the confidence value in edit inputs.
pub const CONFIDENCE_KEY: &str = "confidence";

/// One attribute edit as sent by the mutation layer: an attribute key and
/// its values encoded as strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditInput {
    /// Attribute being edited.
    pub key: String,

    /// Requested values, stringly encoded.
    pub value: Vec<String>,
}

impl EditInput {
    /// Create an edit input.
    pub fn new(key: impl Into<String>, value: Vec<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Single-value confidence edit.
    pub fn confidence(value: u8) -> Self {
        Self::new(CONFIDENCE_KEY, vec![value.to_string()])
    }
}

/// Rewrite a field edit so the persisted confidence respects the user's
/// ceiling.
///
/// Direct confidence edits are capped silently rather than rejected: the
/// user is explicitly and intentionally setting this one field, and this
/// function does not control against the element's current value. Any other
/// edit to an element that has no confidence yet appends a synthesized
/// confidence entry stamped with the editor's ceiling, so no element leaves
/// an update without one.
pub fn adapt_update_inputs_confidence<T: ConfidenceObject>(
    user: &AuthUser,
    input: &EditInput,
    element: &T,
) -> Result<Vec<EditInput>> {
    if input.key != CONFIDENCE_KEY {
        if element.confidence().is_some() {
            return Ok(vec![input.clone()]);
        }
        let stamped = EditInput::confidence(applicable_max(user, element.entity_type())?);
        return Ok(vec![input.clone(), stamped]);
    }

    let max_confidence = applicable_max(user, element.entity_type())?;
    let requested = parse_confidence_value(input)?;
    Ok(vec![EditInput::confidence(requested.min(max_confidence))])
}

fn applicable_max(user: &AuthUser, entity_type: &str) -> Result<u8> {
    let level = compute_user_effective_confidence_level(user).ok_or(
        ConfidenceError::NoEffectiveConfidenceLevel {
            operation: WriteOperation::Update,
        },
    )?;
    Ok(level.max_confidence_for(entity_type))
}

fn parse_confidence_value(input: &EditInput) -> Result<u8> {
    let raw = input
        .value
        .first()
        .ok_or_else(|| ConfidenceError::InvalidConfidenceValue {
            value: String::new(),
        })?;
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfidenceError::InvalidConfidenceValue { value: raw.clone() })?;
    Ok(crop_confidence(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_access::{ConfidenceLevel, Element};

    fn user(max_confidence: Option<u8>) -> AuthUser {
        let mut user = AuthUser::new("user");
        if let Some(max) = max_confidence {
            user = user.with_confidence_level(ConfidenceLevel::new(max));
        }
        user
    }

    fn report(confidence: Option<u8>) -> Element {
        let mut element = Element::new("report", "Report");
        if let Some(c) = confidence {
            element = element.with_confidence(c);
        }
        element
    }

    fn confidence_input(value: u8) -> EditInput {
        EditInput::new(CONFIDENCE_KEY, vec![value.to_string()])
    }

    #[test]
    fn confidence_edits_are_capped_never_rejected() {
        // (user max, requested, element confidence) -> applied value;
        // the element's current confidence is deliberately not controlled.
        let cases: &[(u8, u8, Option<u8>, u8)] = &[
            (50, 30, Some(10), 30),
            (50, 10, Some(30), 10),
            (30, 50, Some(10), 30),
            (30, 10, Some(50), 10),
            (10, 50, Some(30), 10),
            (10, 30, Some(50), 10),
            (10, 30, None, 10),
        ];

        for &(max, requested, existing, applied) in cases {
            let adapted = adapt_update_inputs_confidence(
                &user(Some(max)),
                &confidence_input(requested),
                &report(existing),
            )
            .unwrap();
            assert_eq!(
                adapted,
                vec![EditInput::confidence(applied)],
                "max={max} requested={requested} existing={existing:?}"
            );
        }
    }

    #[test]
    fn other_edits_pass_through_when_the_element_has_confidence() {
        let input = EditInput::new("description", vec!["some text".into()]);
        let adapted =
            adapt_update_inputs_confidence(&user(Some(10)), &input, &report(Some(50))).unwrap();
        assert_eq!(adapted, vec![input]);
    }

    #[test]
    fn other_edits_stamp_confidence_less_elements() {
        let input = EditInput::new("description", vec!["some text".into()]);
        let adapted =
            adapt_update_inputs_confidence(&user(Some(10)), &input, &report(None)).unwrap();
        assert_eq!(adapted, vec![input, EditInput::confidence(10)]);
    }

    #[test]
    fn stamping_requires_a_level() {
        let input = EditInput::new("description", vec!["some text".into()]);
        let err = adapt_update_inputs_confidence(&user(None), &input, &report(None)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "User has no effective max confidence level and cannot update this element"
        );
    }

    #[test]
    fn per_type_overrides_drive_the_cap() {
        let user = AuthUser::new("user")
            .with_confidence_level(ConfidenceLevel::new(40).with_override("Report", Some(90)));
        let adapted =
            adapt_update_inputs_confidence(&user, &confidence_input(80), &report(Some(10)))
                .unwrap();
        assert_eq!(adapted, vec![EditInput::confidence(80)]);
    }

    #[test]
    fn out_of_range_values_are_cropped_before_capping() {
        let adapted = adapt_update_inputs_confidence(
            &user(Some(80)),
            &EditInput::new(CONFIDENCE_KEY, vec!["150".into()]),
            &report(Some(10)),
        )
        .unwrap();
        assert_eq!(adapted, vec![EditInput::confidence(80)]);

        let adapted = adapt_update_inputs_confidence(
            &user(Some(80)),
            &EditInput::new(CONFIDENCE_KEY, vec!["-5".into()]),
            &report(Some(10)),
        )
        .unwrap();
        assert_eq!(adapted, vec![EditInput::confidence(0)]);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = adapt_update_inputs_confidence(
            &user(Some(80)),
            &EditInput::new(CONFIDENCE_KEY, vec!["high".into()]),
            &report(Some(10)),
        )
        .unwrap_err();
        assert!(matches!(err, ConfidenceError::InvalidConfidenceValue { .. }));

        let err = adapt_update_inputs_confidence(
            &user(Some(80)),
            &EditInput::new(CONFIDENCE_KEY, vec![]),
            &report(Some(10)),
        )
        .unwrap_err();
        assert!(matches!(err, ConfidenceError::InvalidConfidenceValue { .. }));
    }

    #[test]
    fn edit_input_matches_the_wire_shape() {
        let input: EditInput =
            serde_json::from_str(r#"{"key": "confidence", "value": ["50"]}"#).unwrap();
        assert_eq!(input, confidence_input(50));
    }
}
