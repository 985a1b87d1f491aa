//! Ranking command handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    BandedAlternative, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
