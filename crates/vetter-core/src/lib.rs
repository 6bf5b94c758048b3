//! Vetter Core - Input classification logic.
//!
//! This crate provides the classification functionality for the Vetter
//! input-sanitization service.

pub mod classifier;

pub use classifier::{Classification, InputClassifier, Verdict};
