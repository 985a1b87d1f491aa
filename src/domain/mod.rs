//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (criterion types, errors)
//! - `ranking` - Pure domain services for ideal-solution ranking
//!   (validation, normalization, reference points, scoring, ordering)

pub mod foundation;
pub mod ranking;
