//! Persona classifier: schema-constrained suggestion of which expert
//! persona fits an idea.
//!
//! An optional enhancement with the opposite failure policy of the
//! pipeline: authentication conditions surface, everything else is logged
//! and collapsed into [`ClassifierError::Unavailable`] so the user can
//! always fall back to manual persona selection.

use std::sync::Arc;

use ideolab_core::analysis::Prediction;
use ideolab_core::error::{ClassifierError, PipelineError};
use serde_json::{json, Value};

use crate::client::{GenerativeModel, StructuredRequest};

/// Fast model used for the heuristic classification call.
pub const CLASSIFIER_MODEL: &str = "gemini-3-flash-preview";

/// Ideas shorter than this carry no useful signal.
pub const MIN_IDEA_CHARS: usize = 10;

const INSTRUCTION: &str = "Analyze this business idea summary. Determine the most useful \
expert persona (VISIONARY, DEVIL, or COACH) to critique it right now based on its apparent \
maturity and risk profile. Identify the most critical Lean Canvas segment to focus on.";

/// Response schema: exactly the three prediction fields, nothing else.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestedPersona": {
                "type": "STRING",
                "enum": ["VISIONARY", "DEVIL", "COACH"]
            },
            "reasoning": { "type": "STRING" },
            "focusArea": { "type": "STRING" }
        },
        "required": ["suggestedPersona", "reasoning", "focusArea"]
    })
}

/// Suggests a persona for an idea, or fails quietly.
pub struct PersonaClassifier {
    model: Arc<dyn GenerativeModel>,
}

impl PersonaClassifier {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Produces a [`Prediction`] for the idea.
    ///
    /// A parse failure or an out-of-range persona is a classification
    /// failure; the caller must keep its current selection. Ideas below
    /// [`MIN_IDEA_CHARS`] fail locally without a network call.
    pub async fn suggest_persona(&self, idea: &str) -> Result<Prediction, ClassifierError> {
        let trimmed = idea.trim();
        if trimmed.chars().count() < MIN_IDEA_CHARS {
            tracing::debug!(len = trimmed.len(), "idea too short for persona suggestion");
            return Err(ClassifierError::Unavailable);
        }

        let request = StructuredRequest {
            model: CLASSIFIER_MODEL.to_string(),
            payload: format!("{}\n\nIdea: {}", INSTRUCTION, trimmed),
            response_schema: response_schema(),
        };

        let raw = match self.model.generate_structured(request).await {
            Ok(raw) => raw,
            Err(PipelineError::Authentication { message }) => {
                return Err(ClassifierError::Authentication { message });
            }
            Err(err) => {
                tracing::warn!(error = %err, "persona suggestion failed");
                return Err(ClassifierError::Unavailable);
            }
        };

        match serde_json::from_str::<Prediction>(&raw) {
            Ok(prediction) => Ok(prediction),
            Err(err) => {
                tracing::warn!(error = %err, "persona suggestion returned an invalid payload");
                Err(ClassifierError::Unavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ideolab_core::persona::Persona;
    use std::sync::Mutex;

    use crate::client::GenerateRequest;

    struct StubModel {
        outcome: Result<String, PipelineError>,
        calls: Mutex<Vec<StructuredRequest>>,
    }

    impl StubModel {
        fn new(outcome: Result<String, PipelineError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerativeModel for StubModel {
        async fn generate(&self, _request: GenerateRequest) -> Result<String, PipelineError> {
            panic!("classifier must never issue plain generate requests")
        }

        async fn generate_structured(
            &self,
            request: StructuredRequest,
        ) -> Result<String, PipelineError> {
            self.calls.lock().unwrap().push(request);
            self.outcome.clone()
        }
    }

    const IDEA: &str = "A subscription service for artisanal coffee";

    #[tokio::test]
    async fn test_valid_response_yields_prediction() {
        let model = StubModel::new(Ok(
            r#"{"suggestedPersona":"DEVIL","reasoning":"Crowded market","focusArea":"Unfair Advantage"}"#
                .to_string(),
        ));
        let classifier = PersonaClassifier::new(model.clone());

        let prediction = classifier.suggest_persona(IDEA).await.unwrap();

        assert_eq!(prediction.suggested_persona, Persona::Devil);
        assert_eq!(prediction.focus_area, "Unfair Advantage");

        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, CLASSIFIER_MODEL);
        assert!(calls[0].payload.contains(IDEA));
        assert_eq!(
            calls[0].response_schema["required"],
            json!(["suggestedPersona", "reasoning", "focusArea"])
        );
        assert_eq!(
            calls[0].response_schema["properties"]["suggestedPersona"]["enum"],
            json!(["VISIONARY", "DEVIL", "COACH"])
        );
    }

    #[tokio::test]
    async fn test_unknown_persona_is_rejected() {
        let model = StubModel::new(Ok(
            r#"{"suggestedPersona":"ORACLE","reasoning":"?","focusArea":"?"}"#.to_string(),
        ));
        let classifier = PersonaClassifier::new(model);

        let err = classifier.suggest_persona(IDEA).await.unwrap_err();
        assert_eq!(err, ClassifierError::Unavailable);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected() {
        let model = StubModel::new(Ok("not json".to_string()));
        let classifier = PersonaClassifier::new(model);

        let err = classifier.suggest_persona(IDEA).await.unwrap_err();
        assert_eq!(err, ClassifierError::Unavailable);
    }

    #[tokio::test]
    async fn test_short_idea_never_calls_the_model() {
        let model = StubModel::new(Ok("{}".to_string()));
        let classifier = PersonaClassifier::new(model.clone());

        let err = classifier.suggest_persona("too short").await.unwrap_err();

        assert_eq!(err, ClassifierError::Unavailable);
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_authentication_failure_surfaces() {
        let model = StubModel::new(Err(PipelineError::Authentication {
            message: "key disabled".to_string(),
        }));
        let classifier = PersonaClassifier::new(model);

        let err = classifier.suggest_persona(IDEA).await.unwrap_err();
        assert!(matches!(err, ClassifierError::Authentication { .. }));
    }

    #[tokio::test]
    async fn test_other_failures_are_swallowed() {
        let model = StubModel::new(Err(PipelineError::rate_limited("quota exceeded")));
        let classifier = PersonaClassifier::new(model);

        let err = classifier.suggest_persona(IDEA).await.unwrap_err();
        assert_eq!(err, ClassifierError::Unavailable);
    }
}
