//! Read-only character catalog.
//!
//! The catalog is a CSV shipped with Mantella (`skyrim_characters.csv`), one
//! row per character. It is re-read in full on every refresh; override
//! records layered on top are the business of `services::overrides`.

pub mod csv;
pub mod record;

pub use record::CharacterRecord;

use std::path::{Path, PathBuf};

use crate::types::AppResult;

/// Parsed catalog with case-insensitive lookup by character name.
///
/// Insertion order follows the source file; duplicate names (case-insensitive)
/// keep the first row seen.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
}

impl Catalog {
    /// Build from parsed records, collapsing case-insensitive duplicate names
    /// (first seen wins) and dropping records with empty names.
    pub fn from_records(records: Vec<CharacterRecord>) -> Self {
        let mut kept: Vec<CharacterRecord> = Vec::new();
        for record in records {
            if record.name.trim().is_empty() {
                continue;
            }
            let duplicate = kept
                .iter()
                .any(|existing| existing.name.eq_ignore_ascii_case(&record.name));
            if !duplicate {
                kept.push(record);
            }
        }

        Self { records: kept }
    }

    /// Read and parse the catalog file.
    pub fn read_from(path: &Path) -> AppResult<Self> {
        let records = csv::read_character_rows(path)?;
        log::info!(
            "Loaded {} catalog rows from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup by character name.
    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Distinct character names, sorted case-insensitively, for list display.
    pub fn character_names(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.name.as_str()))
    }

    /// Distinct race values, sorted case-insensitively, for filter pickers.
    pub fn race_values(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.race.as_str()))
    }

    /// Distinct species values, sorted case-insensitively, for filter pickers.
    pub fn species_values(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.species.as_str()))
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if !out.iter().any(|existing| existing.eq_ignore_ascii_case(value)) {
            out.push(value.to_string());
        }
    }

    out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    out
}

/// Locate the catalog file by walking up from `base_dir`, then falling back
/// to the current working directory. Returns `None` when nothing is found.
pub fn find_catalog_file(base_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(base_dir);
    while let Some(dir) = current {
        let candidate = dir.join(crate::CATALOG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }

    let cwd_candidate = std::env::current_dir()
        .ok()?
        .join(crate::CATALOG_FILE_NAME);
    cwd_candidate.is_file().then_some(cwd_candidate)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
