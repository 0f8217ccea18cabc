use anyhow::Result;
use clap::{Parser, Subcommand};
use ideolab_core::persona::Persona;

mod commands;

#[derive(Parser)]
#[command(name = "ideolab")]
#[command(about = "Ideolab - persona-driven business idea analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full expert critique for a business idea
    Analyze {
        /// The business idea to analyze
        #[arg(long)]
        idea: String,
        /// Expert persona: visionary, devil or coach
        #[arg(long, default_value_t = Persona::Visionary)]
        persona: Persona,
        /// Ask the classifier to pick the persona first
        #[arg(long)]
        suggest: bool,
    },
    /// Suggest which expert persona fits an idea
    Suggest {
        /// The business idea to classify
        #[arg(long)]
        idea: String,
    },
    /// List the available expert personas
    Personas,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            idea,
            persona,
            suggest,
        } => commands::analyze::run(&idea, persona, suggest).await,
        Commands::Suggest { idea } => commands::suggest::run(&idea).await,
        Commands::Personas => commands::personas::run(),
    }
}
