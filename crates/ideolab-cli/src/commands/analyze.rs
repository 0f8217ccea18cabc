//! `ideolab analyze` - run the full generation pipeline.

use std::sync::Arc;

use anyhow::{bail, Result};
use colored::Colorize;
use ideolab_core::analysis::AnalysisRequest;
use ideolab_core::error::ClassifierError;
use ideolab_core::persona::Persona;
use ideolab_gemini::{AnalysisPipeline, PersonaClassifier};

use super::{build_client, render_pipeline_error};

pub async fn run(idea: &str, persona: Persona, suggest: bool) -> Result<()> {
    // Input validation is the caller's job; the pipeline assumes non-empty.
    let idea = idea.trim();
    if idea.is_empty() {
        bail!("The idea must not be empty.");
    }

    let client = Arc::new(build_client()?);

    let persona = if suggest {
        match PersonaClassifier::new(client.clone())
            .suggest_persona(idea)
            .await
        {
            Ok(prediction) => {
                println!(
                    "{} {} ({})",
                    "Suggested persona:".cyan(),
                    prediction.suggested_persona.profile().title.bold(),
                    prediction.reasoning
                );
                prediction.suggested_persona
            }
            Err(ClassifierError::Authentication { message }) => {
                eprintln!("{}", "Action required: API key problem".red().bold());
                eprintln!("{}", message.red());
                bail!(message);
            }
            // Prediction is best-effort; keep the manual selection.
            Err(ClassifierError::Unavailable) => persona,
        }
    } else {
        persona
    };

    let profile = persona.profile();
    println!(
        "{} {} — {}",
        "Analyzing as".cyan(),
        profile.title.bold(),
        profile.subtitle.dimmed()
    );

    let pipeline = AnalysisPipeline::new(client);
    let request = AnalysisRequest::new(idea, persona);

    match pipeline.submit_analysis(&request).await {
        Ok(result) => {
            println!("\n{}", result.text);
            if result.degraded {
                tracing::info!("analysis produced by the fallback model");
            }
            Ok(())
        }
        Err(err) => Err(render_pipeline_error(&err)),
    }
}
