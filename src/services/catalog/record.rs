use serde::{Deserialize, Serialize};

/// One character, either a catalog row or a persisted override record.
///
/// The serialized shape is fixed by the Mantella on-disk format:
/// `{ name, voice_model, bio, race, gender, species }`, snake_case. Every
/// field defaults to empty so partial records parse cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CharacterRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub voice_model: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub species: String,
}