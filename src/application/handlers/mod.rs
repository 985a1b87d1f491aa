//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    BandedAlternative, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
