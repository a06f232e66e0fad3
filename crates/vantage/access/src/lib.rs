//! Vantage Access - identity-side data model for confidence authorization
//!
//! This crate carries the in-memory structures the session/identity layer
//! assembles per request and hands to the confidence policy evaluator:
//!
//! - [`AuthUser`] and [`Group`]: a user snapshot with group memberships
//! - [`Capability`] and the well-known [`BYPASS`] capability name
//! - [`ConfidenceLevel`] / [`ConfidenceOverride`]: the *configured* ceilings
//!   stored on users and groups
//! - [`ConfidenceObject`]: the seam trait exposing an element's entity type
//!   and optional confidence to the evaluator, with [`Element`] as a plain
//!   owned carrier
//!
//! Nothing here performs authorization; the evaluation lives in
//! `vantage-confidence`.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod capability;
pub mod confidence;
pub mod element;
pub mod user;

// Re-export main types
pub use capability::{Capability, BYPASS};
pub use confidence::{crop_confidence, ConfidenceLevel, ConfidenceOverride, MAX_CONFIDENCE_VALUE};
pub use element::{ConfidenceObject, Element};
pub use user::{AuthUser, Group};
