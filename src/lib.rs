//! Suitability Rank - Multi-criteria ranking of alternatives
//!
//! This crate ranks alternatives scored against weighted benefit and cost
//! criteria by their relative closeness to an ideal solution.
//!
//! ```
//! use suitability_rank::domain::ranking::{rank, DecisionMatrix};
//!
//! let matrix = DecisionMatrix::from_rows(vec![
//!     vec![10.0, 100.0],
//!     vec![20.0, 50.0],
//!     vec![15.0, 75.0],
//! ]);
//! let result = rank(&matrix, &[0.5, 0.5], &[1.0, -1.0]).unwrap();
//! assert_eq!(result.best().unwrap().label, "A2");
//! ```

pub mod application;
pub mod config;
pub mod domain;
