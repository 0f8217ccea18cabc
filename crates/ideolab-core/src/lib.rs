pub mod analysis;
pub mod config;
pub mod error;
pub mod persona;
pub mod prompt;

// Re-export common types
pub use analysis::{AnalysisRequest, AnalysisResult, Prediction};
pub use config::ApiCredential;
pub use error::{ClassifierError, PipelineError};
pub use persona::{Persona, PersonaProfile};
