//! Expert persona domain model.
//!
//! Personas shape the tone and emphasis of the generated critique. The set
//! is closed: the classifier schema, the prompt template and the UI all
//! agree on exactly these three.

mod catalog;
mod model;

pub use catalog::profiles;
pub use model::{Persona, PersonaProfile};
