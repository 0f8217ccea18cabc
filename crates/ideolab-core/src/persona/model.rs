//! Persona variant and its display metadata.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The three expert personas a critique can be generated as.
///
/// Serialized in SCREAMING case on the wire (`VISIONARY`, `DEVIL`, `COACH`)
/// because that is what the classifier response schema constrains the model
/// to. Any other value fails deserialization, which callers must treat as a
/// classification failure rather than apply an unknown persona.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Persona {
    /// The disruptive optimist: innovation and global impact.
    Visionary,
    /// The devil's advocate: economic viability and flaws.
    Devil,
    /// The lean coach: MVP scoping and fast iteration.
    Coach,
}

impl Persona {
    /// Returns the immutable profile record for this persona.
    pub fn profile(&self) -> &'static PersonaProfile {
        super::catalog::profile(*self)
    }

    /// The exact name injected into the generation payload.
    pub fn prompt_name(&self) -> &'static str {
        self.profile().prompt_name
    }
}

/// Display metadata for a persona.
///
/// Pure presentation data, kept out of the [`Persona`] variant itself. The
/// `prompt_name` is the one field the pipeline consumes: it is spliced
/// verbatim into the instruction payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaProfile {
    pub persona: Persona,
    /// Display title, e.g. "Le Visionnaire Disruptif"
    pub title: &'static str,
    /// Short characterization, e.g. "L'Optimiste Créatif"
    pub subtitle: &'static str,
    /// One-line description of focus and tone
    pub description: &'static str,
    /// Name used verbatim inside the generated instruction
    pub prompt_name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_format_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&Persona::Visionary).unwrap(),
            "\"VISIONARY\""
        );
        let parsed: Persona = serde_json::from_str("\"DEVIL\"").unwrap();
        assert_eq!(parsed, Persona::Devil);
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        let result: std::result::Result<Persona, _> = serde_json::from_str("\"ORACLE\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Persona::from_str("coach").unwrap(), Persona::Coach);
        assert_eq!(Persona::from_str("Visionary").unwrap(), Persona::Visionary);
        assert!(Persona::from_str("oracle").is_err());
    }

    #[test]
    fn test_every_persona_has_a_profile() {
        for persona in Persona::iter() {
            let profile = persona.profile();
            assert_eq!(profile.persona, persona);
            assert!(!profile.prompt_name.is_empty());
        }
    }
}
