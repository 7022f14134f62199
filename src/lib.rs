//! Levenshtein edit distance by dynamic programming.
//!
//! Two variants of the same computation are provided:
//! - [`levenshtein_matrix`] fills a complete `(m + 1) x (n + 1)` table,
//! - [`levenshtein_rolling`] keeps only two rows alive, addressed by the
//!   parity of the outer row index.
//!
//! Both return the same result for every pair of inputs.

pub mod edit_distance;
pub mod error;

pub use edit_distance::{levenshtein_matrix, levenshtein_rolling};
pub use error::{Error, Result};
