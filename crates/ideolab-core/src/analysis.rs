//! Request and result types for the generation pipeline and the classifier.

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// A single analysis submission: the idea text plus the chosen persona.
///
/// The caller guarantees the idea is non-empty after trimming; the UI layer
/// never submits blank input and the pipeline does not re-validate it.
/// Created per submission, consumed once, discarded after the call resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-form idea text, arbitrary length
    pub idea: String,
    /// Persona shaping the critique
    pub persona: Persona,
}

impl AnalysisRequest {
    pub fn new(idea: impl Into<String>, persona: Persona) -> Self {
        Self {
            idea: idea.into(),
            persona,
        }
    }
}

/// The generated critique.
///
/// The text is an opaque Markdown document; nothing in it is parsed or
/// validated here. `degraded` records structurally that the fallback model
/// produced it, so callers do not have to scan the text for the provenance
/// note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Formatted Markdown document returned by the model
    pub text: String,
    /// True when the fallback model produced this result
    pub degraded: bool,
}

impl AnalysisResult {
    /// Result from the primary model.
    pub fn primary(text: String) -> Self {
        Self {
            text,
            degraded: false,
        }
    }

    /// Result from the fallback model, provenance note already appended.
    pub fn degraded(text: String) -> Self {
        Self {
            text,
            degraded: true,
        }
    }
}

/// Structured persona suggestion returned by the classifier.
///
/// Field names match the response schema sent to the model. An out-of-range
/// `suggestedPersona` fails deserialization upstream, so a constructed
/// `Prediction` always carries a known persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// The persona the classifier recommends
    pub suggested_persona: Persona,
    /// Short rationale for the recommendation
    pub reasoning: String,
    /// The Lean Canvas segment most worth attention
    pub focus_area: String,
}
