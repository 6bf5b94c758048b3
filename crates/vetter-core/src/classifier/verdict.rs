//! Verdict types for input classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two possible outcomes of classifying an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No denylisted pattern was found.
    Sanitized,
    /// The input contains at least one denylisted substring or character.
    Unsanitized,
}

impl Verdict {
    /// Returns the wire-format name of this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Sanitized => "sanitized",
            Verdict::Unsanitized => "unsanitized",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The verdict for the input.
    pub verdict: Verdict,
    /// The token or character that forced rejection (if any).
    pub matched_pattern: Option<String>,
    /// Classification duration in microseconds.
    pub duration_us: u64,
}

impl Classification {
    /// Creates a sanitized (clean) classification.
    pub fn sanitized(duration_us: u64) -> Self {
        Self {
            verdict: Verdict::Sanitized,
            matched_pattern: None,
            duration_us,
        }
    }

    /// Creates an unsanitized classification with the pattern that matched.
    pub fn rejected(pattern: impl Into<String>, duration_us: u64) -> Self {
        Self {
            verdict: Verdict::Unsanitized,
            matched_pattern: Some(pattern.into()),
            duration_us,
        }
    }

    /// Returns true if the input passed all checks.
    pub fn is_sanitized(&self) -> bool {
        self.verdict == Verdict::Sanitized
    }
}
