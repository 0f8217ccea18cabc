//! `ideolab personas` - print the catalog.

use anyhow::Result;
use colored::Colorize;
use ideolab_core::persona;

pub fn run() -> Result<()> {
    for profile in persona::profiles() {
        println!(
            "{:<12} {} — {}",
            profile.persona.to_string().bold(),
            profile.title,
            profile.subtitle.dimmed()
        );
        println!("             {}", profile.description);
    }
    Ok(())
}
