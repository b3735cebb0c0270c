pub mod services;
pub mod types;

/// File name of the read-only character catalog shipped with Mantella.
pub const CATALOG_FILE_NAME: &str = "skyrim_characters.csv";

/// Display label shown in place of a model list when no voice-synthesis
/// install directory is configured or readable. Never a valid voice model.
pub const VOICE_MODEL_FALLBACK_LABEL: &str = "Set xVA Folder!";
