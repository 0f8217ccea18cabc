//! Generation pipeline: compose, invoke, fall back, classify.
//!
//! One primary attempt on the high-capability model; when and only when the
//! primary failure is a rate-limit condition, one best-effort attempt on
//! the fast model with a reduced reasoning budget. No further retries, no
//! backoff, no caching.

use std::sync::Arc;

use ideolab_core::analysis::{AnalysisRequest, AnalysisResult};
use ideolab_core::error::PipelineError;
use ideolab_core::prompt::{compose_payload, SYSTEM_INSTRUCTION};

use crate::client::{GenerateRequest, GenerativeModel};

/// High-capability model used for the primary attempt.
pub const PRIMARY_MODEL: &str = "gemini-3-pro-preview";

/// Fast model used for the single fallback attempt.
pub const FALLBACK_MODEL: &str = "gemini-3-flash-preview";

/// Moderate creativity, bounded; same for both attempts.
const TEMPERATURE: f64 = 0.7;

const PRIMARY_THINKING_BUDGET: u32 = 2048;
const FALLBACK_THINKING_BUDGET: u32 = 1024;

/// Provenance note appended exactly once to fallback-generated results.
pub const FALLBACK_NOTE: &str = "> *Note: analysis generated by the fast model \
(Gemini Flash) due to temporary saturation of the primary model.*";

/// Turns an [`AnalysisRequest`] into an [`AnalysisResult`] or a classified
/// [`PipelineError`].
pub struct AnalysisPipeline {
    model: Arc<dyn GenerativeModel>,
}

impl AnalysisPipeline {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Submits one analysis request.
    ///
    /// Recovers exactly one class of failure locally (rate limit →
    /// fallback); every other failure is surfaced classified. An empty
    /// primary response is a failure, never a success, and does not
    /// trigger the fallback.
    pub async fn submit_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, PipelineError> {
        let payload = compose_payload(request.persona, &request.idea);

        let primary = GenerateRequest {
            model: PRIMARY_MODEL.to_string(),
            payload: payload.clone(),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            temperature: TEMPERATURE,
            thinking_budget: PRIMARY_THINKING_BUDGET,
        };

        match self.model.generate(primary).await {
            Ok(text) if !text.trim().is_empty() => Ok(AnalysisResult::primary(text)),
            Ok(_) => Err(PipelineError::unknown(
                "The primary model returned an empty analysis.",
            )),
            Err(err) if err.is_rate_limited() => {
                tracing::warn!(error = %err, "primary model quota exhausted, switching to fallback");
                self.run_fallback(payload).await
            }
            Err(err) => Err(err),
        }
    }

    /// One-shot fallback on the fast model.
    ///
    /// Any failure here, whatever its own classification, is reported as
    /// ServiceUnavailable: the fallback is a second chance, not a chain.
    async fn run_fallback(&self, payload: String) -> Result<AnalysisResult, PipelineError> {
        let fallback = GenerateRequest {
            model: FALLBACK_MODEL.to_string(),
            payload,
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            temperature: TEMPERATURE,
            thinking_budget: FALLBACK_THINKING_BUDGET,
        };

        match self.model.generate(fallback).await {
            Ok(text) if !text.trim().is_empty() => Ok(AnalysisResult::degraded(format!(
                "{}\n\n{}",
                text, FALLBACK_NOTE
            ))),
            Ok(_) => Err(saturated()),
            Err(err) => {
                tracing::error!(error = %err, "fallback model also failed");
                Err(saturated())
            }
        }
    }
}

fn saturated() -> PipelineError {
    PipelineError::service_unavailable(
        "The AI services are saturated. Try again in a few moments.",
    )
}
