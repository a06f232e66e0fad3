//! # Vantage Confidence Policy
//!
//! Confidence-level authorization for the Vantage threat-intelligence
//! platform: decides, for a user and a data-bearing element, whether a
//! write (create, update, upsert) is permitted, and which confidence value
//! is ultimately persisted.
//!
//! ## Overview
//!
//! Every user resolves to at most one *effective confidence level*, derived
//! fresh per request with strict precedence:
//!
//! 1. the `BYPASS` capability (unrestricted trust, full scale),
//! 2. the user's own configured level,
//! 3. the highest level among the user's groups,
//! 4. nothing — the user cannot write confidence-bearing elements.
//!
//! That level, with its per-entity-type overrides, gates and caps writes.
//! Create/upsert paths return the value to persist; direct field edits are
//! capped silently; checks against existing elements deny with typed
//! errors the mutation layer maps to permission-denied responses.
//!
//! ## Key Components
//!
//! - [`compute_user_effective_confidence_level`]: precedence resolution
//! - [`EffectiveConfidenceLevel`] / [`LevelSource`]: the derived level and
//!   where it came from
//! - [`control_user_confidence_against_element`]: gate updates to existing
//!   elements (with [`user_confidence_allows_element`] as the non-raising
//!   form)
//! - [`control_create_input_with_user_confidence`] /
//!   [`control_upsert_input_with_user_confidence`]: gate creates and
//!   upserts, choosing the value to persist
//! - [`adapt_update_inputs_confidence`]: rewrite raw field edits
//! - [`ConfidenceIndex`]: injected schema knowledge of which entity types
//!   track confidence at all
//!
//! ## Example
//!
//! ```rust
//! use vantage_access::{AuthUser, ConfidenceLevel, Element};
//! use vantage_confidence::{
//!     compute_user_effective_confidence_level, control_create_input_with_user_confidence,
//! };
//!
//! let user = AuthUser::new("jdoe").with_confidence_level(ConfidenceLevel::new(60));
//! let level = compute_user_effective_confidence_level(&user).unwrap();
//! assert_eq!(level.max_confidence, 60);
//!
//! // A requested confidence of 80 is capped at the user's ceiling.
//! let input = Element::new("report--1", "Report").with_confidence(80);
//! let outcome = control_create_input_with_user_confidence(&user, &input, None).unwrap();
//! assert_eq!(outcome.confidence_level_to_apply, 60);
//! ```
//!
//! All functions are pure and synchronous over caller-supplied snapshots:
//! no I/O, no shared state, safe to call concurrently from any number of
//! request handlers.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod adapt;
pub mod control;
pub mod error;
pub mod level;
pub mod schema;

// Re-exports
pub use adapt::{adapt_update_inputs_confidence, EditInput, CONFIDENCE_KEY};
pub use control::{
    control_create_input_with_user_confidence, control_upsert_input_with_user_confidence,
    control_user_confidence_against_element, user_confidence_allows_element,
    CreateConfidenceOutcome, UpsertConfidenceOutcome,
};
pub use error::{ConfidenceError, Result, WriteOperation};
pub use level::{
    compute_user_effective_confidence_level, EffectiveConfidenceLevel, LevelSource,
};
pub use schema::{ConfidenceIndex, StaticConfidenceIndex};
