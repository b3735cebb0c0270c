//! Installed voice-model directory enumeration.
//!
//! Two provider layouts are supported: xVA-Synth keeps one JSON per model in
//! a flat game folder with an `sk_` stem prefix; Piper nests models under
//! language-coded folders with arbitrary file extensions. Either way the
//! output is a list of raw filename stems; an absent or unreadable directory
//! is an empty list, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::services::voice::index::VoiceModelIndex;

/// Relative model directory inside an xVA-Synth install.
const XVA_MODEL_SUBDIR: &[&str] = &["resources", "app", "models", "Skyrim"];
/// Stem prefix xVA-Synth puts on Skyrim voice models.
const XVA_STEM_PREFIX: &str = "sk_";
/// Relative model directory inside a Piper install.
const PIPER_MODEL_SUBDIR: &[&str] = &["models"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[default]
    XvaSynth,
    Piper,
}

impl Provider {
    /// Naming-convention prefix stripped from stems before indexing.
    pub fn prefix_strip(&self) -> Option<&'static str> {
        match self {
            Provider::XvaSynth => Some(XVA_STEM_PREFIX),
            Provider::Piper => None,
        }
    }
}

/// List raw model filename stems for a provider install directory.
pub fn list_model_tokens(provider: Provider, install_dir: &Path) -> Vec<String> {
    match provider {
        Provider::XvaSynth => list_flat_json_stems(&join_all(install_dir, XVA_MODEL_SUBDIR)),
        Provider::Piper => list_nested_stems(&join_all(install_dir, PIPER_MODEL_SUBDIR)),
    }
}

/// Build the model index for a provider, or an empty index when no install
/// directory is configured.
pub fn build_index(provider: Provider, install_dir: Option<&Path>) -> VoiceModelIndex {
    let Some(install_dir) = install_dir else {
        return VoiceModelIndex::default();
    };

    let tokens = list_model_tokens(provider, install_dir);
    VoiceModelIndex::build(&tokens, provider.prefix_strip())
}

/// Display names for a model picker: the index's sorted names, or the
/// "not configured" label when the index is empty.
pub fn model_names_for_display(index: &VoiceModelIndex) -> Vec<String> {
    if index.is_empty() {
        vec![crate::VOICE_MODEL_FALLBACK_LABEL.to_string()]
    } else {
        index.display_names()
    }
}

/// Flat layout: `*.json` files directly in the model directory.
fn list_flat_json_stems(model_dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(model_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read model directory {}: {e}", model_dir.display());
            return Vec::new();
        }
    };

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        })
        .filter_map(|path| stem_of(&path))
        .collect()
}

/// Nested layout: any file under language-coded subfolders, any extension.
fn list_nested_stems(model_dir: &Path) -> Vec<String> {
    if !model_dir.is_dir() {
        log::warn!("Model directory {} does not exist", model_dir.display());
        return Vec::new();
    }

    WalkDir::new(model_dir)
        .min_depth(2)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| stem_of(entry.path()))
        .collect()
}

fn stem_of(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let stem = stem.trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

fn join_all(base: &Path, parts: &[&str]) -> std::path::PathBuf {
    parts.iter().fold(base.to_path_buf(), |p, part| p.join(part))
}

#[cfg(test)]
#[path = "tests/providers_tests.rs"]
mod tests;
