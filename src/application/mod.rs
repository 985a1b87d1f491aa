//! Application layer - Commands and Handlers.
//!
//! This layer turns caller-owned input into ranking requests, applies
//! configuration (weighting, rounding, bands) and shapes results for display.

pub mod handlers;

pub use handlers::{
    BandedAlternative, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
