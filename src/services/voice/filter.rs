//! Visible-set filtering for the character list.
//!
//! Every predicate is pure and the composition is a plain AND, so the
//! filtered set is exactly the intersection of each predicate applied on
//! its own.

use crate::services::catalog::{Catalog, CharacterRecord};
use crate::services::voice::index::VoiceModelIndex;

/// One character as the filter sees it: the catalog row, the override (if
/// any), and whether that override exists.
#[derive(Debug, Clone)]
pub struct CharacterEntry {
    pub catalog: CharacterRecord,
    pub override_record: Option<CharacterRecord>,
}

impl CharacterEntry {
    pub fn has_override(&self) -> bool {
        self.override_record.is_some()
    }

    /// Effective voice model: override-if-present, else catalog.
    pub fn effective_voice_model(&self) -> &str {
        match &self.override_record {
            Some(record) => &record.voice_model,
            None => &self.catalog.voice_model,
        }
    }

    /// Effective gender for filtering: override value when non-empty, else
    /// the catalog value.
    pub fn effective_gender(&self) -> &str {
        effective_field(&self.override_record, &self.catalog, |r| &r.gender)
    }

    pub fn effective_race(&self) -> &str {
        effective_field(&self.override_record, &self.catalog, |r| &r.race)
    }

    pub fn effective_species(&self) -> &str {
        effective_field(&self.override_record, &self.catalog, |r| &r.species)
    }
}

fn effective_field<'a>(
    override_record: &'a Option<CharacterRecord>,
    catalog: &'a CharacterRecord,
    field: fn(&CharacterRecord) -> &str,
) -> &'a str {
    match override_record {
        Some(record) if !field(record).trim().is_empty() => field(record),
        _ => field(catalog),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverridePresenceFilter {
    #[default]
    All,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceModelStatusFilter {
    #[default]
    All,
    /// Effective model names an installed model.
    Valid,
    /// Effective model is set but not installed.
    Invalid,
    /// Effective model is empty.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Female,
    Male,
    /// Gender field is empty.
    Unset,
}

/// AND-composed filter over character entries. `Default` passes everything.
#[derive(Debug, Clone, Default)]
pub struct CharacterFilter {
    /// Case-insensitive name substring; empty matches all.
    pub name_contains: String,
    pub override_presence: OverridePresenceFilter,
    pub voice_model_status: VoiceModelStatusFilter,
    pub gender: GenderFilter,
    /// Exact case-insensitive race; `None` passes all.
    pub race: Option<String>,
    /// Exact case-insensitive species; `None` passes all.
    pub species: Option<String>,
}

impl CharacterFilter {
    pub fn matches(&self, entry: &CharacterEntry, index: &VoiceModelIndex) -> bool {
        self.matches_name(entry)
            && self.matches_override_presence(entry)
            && self.matches_voice_status(entry, index)
            && self.matches_gender(entry)
            && self.matches_race(entry)
            && self.matches_species(entry)
    }

    /// Apply to a whole entry list, preserving order.
    pub fn apply<'a>(
        &self,
        entries: &'a [CharacterEntry],
        index: &VoiceModelIndex,
    ) -> Vec<&'a CharacterEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry, index))
            .collect()
    }

    fn matches_name(&self, entry: &CharacterEntry) -> bool {
        let needle = self.name_contains.trim().to_lowercase();
        needle.is_empty() || entry.catalog.name.to_lowercase().contains(&needle)
    }

    fn matches_override_presence(&self, entry: &CharacterEntry) -> bool {
        match self.override_presence {
            OverridePresenceFilter::All => true,
            OverridePresenceFilter::Yes => entry.has_override(),
            OverridePresenceFilter::No => !entry.has_override(),
        }
    }

    fn matches_voice_status(&self, entry: &CharacterEntry, index: &VoiceModelIndex) -> bool {
        let model = entry.effective_voice_model();
        match self.voice_model_status {
            VoiceModelStatusFilter::All => true,
            VoiceModelStatusFilter::Valid => index.is_valid(model),
            VoiceModelStatusFilter::Invalid => !model.trim().is_empty() && !index.is_valid(model),
            VoiceModelStatusFilter::None => model.trim().is_empty(),
        }
    }

    fn matches_gender(&self, entry: &CharacterEntry) -> bool {
        let gender = entry.effective_gender();
        match self.gender {
            GenderFilter::All => true,
            GenderFilter::Female => gender.to_lowercase() == "female",
            GenderFilter::Male => gender.to_lowercase() == "male",
            GenderFilter::Unset => gender.trim().is_empty(),
        }
    }

    fn matches_race(&self, entry: &CharacterEntry) -> bool {
        match &self.race {
            None => true,
            Some(race) => entry.effective_race().eq_ignore_ascii_case(race),
        }
    }

    fn matches_species(&self, entry: &CharacterEntry) -> bool {
        match &self.species {
            None => true,
            Some(species) => entry.effective_species().eq_ignore_ascii_case(species),
        }
    }
}

/// Assemble the full entry list: every catalog record in source order, then
/// override-only characters appended. Duplicate names (case-insensitive)
/// keep the catalog entry.
pub fn build_entries<F>(
    catalog: &Catalog,
    override_names: &[String],
    override_lookup: F,
) -> Vec<CharacterEntry>
where
    F: Fn(&str) -> Option<CharacterRecord>,
{
    let mut entries: Vec<CharacterEntry> = catalog
        .records()
        .iter()
        .map(|record| CharacterEntry {
            catalog: record.clone(),
            override_record: override_lookup(&record.name),
        })
        .collect();

    for name in override_names {
        let known = entries
            .iter()
            .any(|e| e.catalog.name.eq_ignore_ascii_case(name));
        if known {
            continue;
        }

        if let Some(record) = override_lookup(name) {
            entries.push(CharacterEntry {
                catalog: CharacterRecord {
                    name: name.clone(),
                    ..CharacterRecord::default()
                },
                override_record: Some(record),
            });
        }
    }

    entries
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
