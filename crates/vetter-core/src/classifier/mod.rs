//! Input classification for SQL-injection screening.
//!
//! This module decides whether a user-supplied string is safe to pass
//! further downstream or carries injection markers.

mod denylist;
mod verdict;

pub use denylist::InputClassifier;
pub use verdict::{Classification, Verdict};
