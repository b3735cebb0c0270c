//! Bulk voice-model fix planning.
//!
//! Planning is pure: it walks the visible character set and decides, per
//! character, whether a new override is needed and which model to assign.
//! Applying is a separate sequential pass over the finished plan, so a write
//! failure partway through never disturbs what was planned.

use std::collections::HashSet;

use crate::services::catalog::{Catalog, CharacterRecord};
use crate::services::overrides::OverrideStore;
use crate::services::voice::index::VoiceModelIndex;
use crate::services::voice::resolver::{resolve, ResolveInput};

/// One planned override write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixCandidate {
    pub character_name: String,
    /// Record to persist, `voice_model` still holding the pre-fix value.
    pub record: CharacterRecord,
    /// Displayed voice model before the fix (may be empty).
    pub current_voice_model: String,
    /// Resolved model display name to assign.
    pub resolved_voice_model: String,
}

/// Outcome of a planning pass over the visible character set.
#[derive(Debug, Clone, Default)]
pub struct FixPlan {
    pub fixes: Vec<FixCandidate>,
    /// Characters that needed a fix but no tier matched.
    pub skipped_count: usize,
    /// Characters whose existing override already names an installed model.
    pub already_valid_override_count: usize,
}

/// Counts from applying a plan's writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub applied_count: usize,
    pub failed_count: usize,
}

/// Compute fixes for the visible characters, in their given order.
///
/// Duplicate names (case-insensitive) are evaluated once. A valid existing
/// override is never overwritten; a character with no override whose catalog
/// default is already valid needs nothing. Re-running after applying a plan
/// therefore produces zero new fixes.
pub fn plan_fixes<F>(
    visible_names: &[String],
    catalog: &Catalog,
    override_lookup: F,
    index: &VoiceModelIndex,
) -> FixPlan
where
    F: Fn(&str) -> Option<CharacterRecord>,
{
    let mut plan = FixPlan::default();
    let mut evaluated: HashSet<String> = HashSet::new();

    for name in visible_names {
        if !evaluated.insert(name.to_lowercase()) {
            continue;
        }

        let Some(catalog_record) = catalog.get(name) else {
            continue;
        };

        let existing_override = override_lookup(name.as_str());
        if let Some(ref record) = existing_override {
            if index.is_valid(&record.voice_model) {
                plan.already_valid_override_count += 1;
                continue;
            }
        } else if index.is_valid(&catalog_record.voice_model) {
            // Catalog default is good; no override needed.
            continue;
        }

        let working = existing_override.unwrap_or_else(|| catalog_record.clone());
        let input = resolution_input(&working, catalog_record);

        match resolve(&input, index.candidates()) {
            Some(resolved) => plan.fixes.push(FixCandidate {
                character_name: catalog_record.name.clone(),
                current_voice_model: working.voice_model.clone(),
                resolved_voice_model: resolved,
                record: working,
            }),
            None => plan.skipped_count += 1,
        }
    }

    plan
}

/// Resolution inputs: working-record fields, back-filled from the catalog
/// row where empty. Only the inputs are back-filled; the persisted record
/// keeps its own field values.
fn resolution_input(working: &CharacterRecord, catalog_record: &CharacterRecord) -> ResolveInput {
    ResolveInput {
        name: fallback(&working.name, &catalog_record.name),
        gender: fallback(&working.gender, &catalog_record.gender),
        race: fallback(&working.race, &catalog_record.race),
        species: fallback(&working.species, &catalog_record.species),
    }
}

fn fallback(value: &str, catalog_value: &str) -> String {
    if value.trim().is_empty() {
        catalog_value.to_string()
    } else {
        value.to_string()
    }
}

/// Write every planned fix to the override store, sequentially.
///
/// A failed write is logged and counted; the rest of the batch still goes
/// through.
pub fn apply_fixes(plan: &FixPlan, store: &OverrideStore) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for fix in &plan.fixes {
        let mut record = fix.record.clone();
        record.voice_model = fix.resolved_voice_model.clone();

        match store.write(&fix.character_name, &record) {
            Ok(()) => outcome.applied_count += 1,
            Err(e) => {
                log::warn!(
                    "Failed to write voice-model fix for '{}': {e}",
                    fix.character_name
                );
                outcome.failed_count += 1;
            }
        }
    }

    log::info!(
        "Applied {} voice-model fixes ({} failed)",
        outcome.applied_count,
        outcome.failed_count
    );
    outcome
}

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod tests;
