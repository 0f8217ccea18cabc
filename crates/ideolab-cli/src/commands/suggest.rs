//! `ideolab suggest` - classifier only.

use std::sync::Arc;

use anyhow::{bail, Result};
use colored::Colorize;
use ideolab_core::error::ClassifierError;
use ideolab_gemini::PersonaClassifier;

use super::build_client;

pub async fn run(idea: &str) -> Result<()> {
    let client = Arc::new(build_client()?);
    let classifier = PersonaClassifier::new(client);

    match classifier.suggest_persona(idea.trim()).await {
        Ok(prediction) => {
            let profile = prediction.suggested_persona.profile();
            println!("{} {}", "Persona:".cyan(), profile.title.bold());
            println!("{} {}", "Reasoning:".cyan(), prediction.reasoning);
            println!("{} {}", "Focus area:".cyan(), prediction.focus_area);
            Ok(())
        }
        Err(ClassifierError::Authentication { message }) => {
            eprintln!("{}", "Action required: API key problem".red().bold());
            eprintln!("{}", message.red());
            bail!(message);
        }
        Err(ClassifierError::Unavailable) => {
            bail!("No suggestion available for this idea. Pick a persona manually.");
        }
    }
}
