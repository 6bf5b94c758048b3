//! Denylist-based input classifier.
//!
//! Flags strings carrying SQL-injection markers using a fixed set of
//! literal substrings plus a pre-compiled character-class regex.

use std::time::Instant;

use regex::Regex;

use super::{Classification, Verdict};

/// Literal substrings that force an unsanitized verdict.
///
/// Matching is case-sensitive and substring-based, not word-based:
/// `UPDATED` triggers on `UPDATE`, while lowercase `drop` does not
/// trigger on `DROP`.
const LITERAL_DENYLIST: &[&str] = &[";", "--", "DROP", "DELETE", "INSERT", "UPDATE"];

/// Characters that force an unsanitized verdict regardless of context.
const CHARACTER_CLASS: &str = r#"[;*|'"=()\[\]\{\}%@,]"#;

/// Denylist classifier for user-supplied input strings.
///
/// The verdict is a pure function of the input: no normalization, no
/// case-folding, no trimming, no length limits. `classify` takes `&self`
/// and the classifier holds no mutable state, so a single instance can be
/// shared across any number of threads.
pub struct InputClassifier {
    injection_chars: Regex,
}

impl InputClassifier {
    /// Creates a classifier with the built-in denylist.
    pub fn new() -> Self {
        Self {
            injection_chars: Regex::new(CHARACTER_CLASS).expect("Invalid character-class pattern"),
        }
    }

    /// Classifies the given input string.
    ///
    /// Empty input is sanitized by definition and short-circuits before
    /// any denylist check runs.
    pub fn classify(&self, input: &str) -> Classification {
        let start = Instant::now();

        if input.is_empty() {
            return Classification::sanitized(start.elapsed().as_micros() as u64);
        }

        for token in LITERAL_DENYLIST {
            if input.contains(token) {
                return Classification::rejected(*token, start.elapsed().as_micros() as u64);
            }
        }

        if let Some(m) = self.injection_chars.find(input) {
            return Classification::rejected(m.as_str(), start.elapsed().as_micros() as u64);
        }

        Classification::sanitized(start.elapsed().as_micros() as u64)
    }
}

impl Default for InputClassifier {
    fn default() -> Self {
        Self::new()
    }
}
