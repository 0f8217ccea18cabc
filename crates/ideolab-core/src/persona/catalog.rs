//! Static persona catalog.
//!
//! The profiles are fixed configuration defined once at process start and
//! never mutated. Prompt names stay in French because the instruction
//! template addresses the model in French.

use super::model::{Persona, PersonaProfile};

static VISIONARY: PersonaProfile = PersonaProfile {
    persona: Persona::Visionary,
    title: "Le Visionnaire Disruptif",
    subtitle: "L'Optimiste Créatif",
    description: "Inspirant, futuriste. Focus sur l'innovation de rupture et l'impact mondial.",
    prompt_name: "LE VISIONNAIRE DISRUPTIF",
};

static DEVIL: PersonaProfile = PersonaProfile {
    persona: Persona::Devil,
    title: "L'Avocat du Diable",
    subtitle: "Le Réaliste Sévère",
    description: "Direct, sceptique. Focus sur la viabilité économique et les failles.",
    prompt_name: "L'AVOCAT DU DIABLE",
};

static COACH: PersonaProfile = PersonaProfile {
    persona: Persona::Coach,
    title: "Le Coach Lean",
    subtitle: "Le Praticien Méthodique",
    description: "Pédagogue, pragmatique. Focus sur le MVP et l'itération rapide.",
    prompt_name: "LE COACH LEAN",
};

/// Returns the profile record for a persona.
pub(super) fn profile(persona: Persona) -> &'static PersonaProfile {
    match persona {
        Persona::Visionary => &VISIONARY,
        Persona::Devil => &DEVIL,
        Persona::Coach => &COACH,
    }
}

/// Returns the full catalog in presentation order.
pub fn profiles() -> [&'static PersonaProfile; 3] {
    [&VISIONARY, &DEVIL, &COACH]
}
