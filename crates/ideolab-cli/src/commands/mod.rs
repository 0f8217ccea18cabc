pub mod analyze;
pub mod personas;
pub mod suggest;

use anyhow::anyhow;
use colored::Colorize;
use ideolab_core::error::PipelineError;
use ideolab_gemini::GeminiClient;

/// Builds the Gemini client from the startup credential.
///
/// The credential is read here, once, and injected into the client; nothing
/// below the CLI reads the environment.
pub fn build_client() -> anyhow::Result<GeminiClient> {
    let credential = ideolab_core::config::ApiCredential::from_env()
        .map_err(|err| anyhow!(err.message().to_string()))?;
    Ok(GeminiClient::new(credential))
}

/// Renders a classified pipeline error and converts it for the exit path.
///
/// Authentication failures get the distinct actionable banner; everything
/// else gets a generic retry-suggesting message above the detail.
pub fn render_pipeline_error(err: &PipelineError) -> anyhow::Error {
    match err {
        PipelineError::Authentication { message } => {
            eprintln!("{}", "Action required: API key problem".red().bold());
            eprintln!("{}", message.red());
        }
        PipelineError::Validation { message } => {
            eprintln!("{}", "Configuration problem".red().bold());
            eprintln!("{}", message.red());
        }
        other => {
            eprintln!("{}", "The analysis could not be generated. Please retry.".yellow());
            eprintln!("{}", other.message().dimmed());
        }
    }
    anyhow!(err.message().to_string())
}
