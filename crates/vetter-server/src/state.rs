//! Application state for the API server.

use std::sync::Arc;

use vetter_core::InputClassifier;

/// Shared application state.
///
/// The classifier is immutable after construction, so handlers share a
/// bare `Arc` with no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Input classifier.
    pub classifier: Arc<InputClassifier>,
}

impl AppState {
    /// Creates application state with the built-in classifier.
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(InputClassifier::new()),
        }
    }

    /// Creates application state with a custom classifier.
    pub fn with_classifier(classifier: InputClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
