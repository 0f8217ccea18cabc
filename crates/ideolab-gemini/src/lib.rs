//! Gemini interaction layer for Ideolab.
//!
//! Provides the remote-model seam and the two operations built on it:
//! - [`AnalysisPipeline`]: full persona critique with a one-shot capacity
//!   fallback and a classified error taxonomy
//! - [`PersonaClassifier`]: schema-constrained persona suggestion that
//!   swallows every failure except authentication

pub mod classifier;
pub mod client;
pub mod pipeline;

// Re-export main types
pub use classifier::PersonaClassifier;
pub use client::{GeminiClient, GenerateRequest, GenerativeModel, StructuredRequest};
pub use pipeline::AnalysisPipeline;
