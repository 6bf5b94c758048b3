//! API request and response models.

use serde::{Deserialize, Serialize};
use vetter_core::Verdict;

/// Request body for POST /v1/sanitized/input/.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// The input text to classify. A missing field is treated as empty.
    #[serde(default)]
    pub input: String,
}

/// Response body for POST /v1/sanitized/input/.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Verdict for the submitted input.
    pub result: Verdict,
}
