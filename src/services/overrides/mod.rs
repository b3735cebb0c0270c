//! Per-character override record store.
//!
//! One pretty-printed JSON file per character, named by a filename-safe
//! sanitization of the character name, under the Mantella data directory.
//! An override supersedes the catalog row of the same name; a missing or
//! unreadable file means "no override exists".

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::services::catalog::CharacterRecord;
use crate::types::{AppError, AppResult};

/// Characters that cannot appear in an override file name.
static RE_FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("Invalid regex"));

/// Store rooted at a single overrides directory.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    root: PathBuf,
}

impl OverrideStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default Mantella location:
    /// `<Documents>/My Games/Mantella/data/Skyrim/character_overrides`.
    pub fn default_location() -> Option<Self> {
        let documents = dirs::document_dir()?;
        Some(Self::new(
            documents
                .join("My Games")
                .join("Mantella")
                .join("data")
                .join("Skyrim")
                .join("character_overrides"),
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a character, or `None` when the name sanitizes away
    /// to nothing.
    pub fn file_path(&self, character_name: &str) -> Option<PathBuf> {
        let key = sanitize_character_key(character_name)?;
        Some(self.root.join(format!("{key}.json")))
    }

    /// Read a character's override record. Missing file yields `None`;
    /// unreadable or malformed files are errors the caller may treat as
    /// "no override".
    pub fn read(&self, character_name: &str) -> AppResult<Option<CharacterRecord>> {
        let Some(path) = self.file_path(character_name) else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let record: CharacterRecord = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    /// Like `read`, but degrades any failure to `None` with a warning.
    /// This is the lookup shape the bulk planner consumes.
    pub fn read_or_none(&self, character_name: &str) -> Option<CharacterRecord> {
        match self.read(character_name) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Failed to read override for '{character_name}': {e}");
                None
            }
        }
    }

    /// Write a character's record, create-or-replace. The overrides
    /// directory is created on demand.
    pub fn write(&self, character_name: &str, record: &CharacterRecord) -> AppResult<()> {
        let path = self.file_path(character_name).ok_or_else(|| {
            AppError::InvalidName(format!(
                "'{character_name}' contains only invalid filename characters"
            ))
        })?;

        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        log::info!("Wrote override for '{character_name}'");
        Ok(())
    }

    /// Whether an override file exists for this character.
    pub fn exists(&self, character_name: &str) -> bool {
        self.file_path(character_name)
            .is_some_and(|path| path.exists())
    }

    /// Character names of every stored override, taken from the records
    /// themselves (file names are sanitized and lossy). Unreadable records
    /// are skipped with a warning. Missing directory is an empty list.
    pub fn list_names(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"));
            if !is_json {
                continue;
            }

            let record: Option<CharacterRecord> = fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_json::from_str(&content).ok());
            match record {
                Some(record) if !record.name.trim().is_empty() => names.push(record.name),
                _ => log::warn!("Skipping unreadable override {}", path.display()),
            }
        }

        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }
}

/// Sanitize a character name into a filename-safe key: split on forbidden
/// path characters, drop empty segments, join with `_`, trim. `None` when
/// nothing survives.
pub fn sanitize_character_key(character_name: &str) -> Option<String> {
    if character_name.trim().is_empty() {
        return None;
    }

    let segments: Vec<&str> = RE_FORBIDDEN_CHARS
        .split(character_name)
        .filter(|s| !s.is_empty())
        .collect();

    let key = segments.join("_").trim().to_string();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
