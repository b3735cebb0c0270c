//! Voice-model resolution for characters whose assignment is missing or
//! stale.
//!
//! Resolution is a fixed list of independent tiers tried in order; the first
//! tier that produces a match wins and each tier returns the first matching
//! candidate in stored order. No scoring; ambiguity is settled by candidate
//! order, which keeps bulk fixes reproducible run to run.

use crate::services::voice::index::ModelCandidate;
use crate::services::voice::normalizer::normalize_contains;

/// Fallback token naming the generic/neutral variant of a voice line set
/// (e.g. `MaleNordEventoned`).
const GENERIC_VARIANT_TOKEN: &str = "eventoned";

/// Attributes a character brings to resolution. All fields may be empty;
/// an empty field just disables the tiers that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveInput {
    pub name: String,
    pub gender: String,
    pub race: String,
    pub species: String,
}

/// Pick the best installed model for a character, or `None` when every tier
/// fails. Returns the candidate's display name.
pub fn resolve(input: &ResolveInput, candidates: &[ModelCandidate]) -> Option<String> {
    type Tier = fn(&ResolveInput, &[ModelCandidate]) -> Option<String>;

    const TIERS: [Tier; 4] = [
        match_by_name,
        match_by_gender_race,
        match_by_gender_species,
        match_by_gender_generic,
    ];

    TIERS.iter().find_map(|tier| tier(input, candidates))
}

/// Tier 1: the character's name appears inside a model name.
fn match_by_name(input: &ResolveInput, candidates: &[ModelCandidate]) -> Option<String> {
    let name_key = normalize_contains(&input.name);
    if name_key.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|c| c.normalized_contains.contains(&name_key))
        .map(|c| c.display_name.clone())
}

/// Tier 2: gender token at a segment boundary, race token somewhere after.
fn match_by_gender_race(input: &ResolveInput, candidates: &[ModelCandidate]) -> Option<String> {
    match_ordered_pair(&input.gender, &input.race, candidates)
}

/// Tier 3: as tier 2, with the species token instead of race.
fn match_by_gender_species(input: &ResolveInput, candidates: &[ModelCandidate]) -> Option<String> {
    match_ordered_pair(&input.gender, &input.species, candidates)
}

/// Tier 4: as tier 2, with the generic-variant token instead of race.
fn match_by_gender_generic(input: &ResolveInput, candidates: &[ModelCandidate]) -> Option<String> {
    let gender_key = normalize_contains(&input.gender);
    if gender_key.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|c| {
            ordered_pair_in_segmented(&c.normalized_segmented, &gender_key, GENERIC_VARIANT_TOKEN)
        })
        .map(|c| c.display_name.clone())
}

fn match_ordered_pair(
    first: &str,
    second: &str,
    candidates: &[ModelCandidate],
) -> Option<String> {
    let first_key = normalize_contains(first);
    let second_key = normalize_contains(second);
    if first_key.is_empty() || second_key.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|c| ordered_pair_in_segmented(&c.normalized_segmented, &first_key, &second_key))
        .map(|c| c.display_name.clone())
}

/// True when `first` occurs in `segmented` starting at position 0 or right
/// after an underscore, with `second` occurring anywhere after the end of
/// that occurrence.
///
/// Anchoring the first token avoids short-token false positives (a bare "m"
/// gender value matching the inside of an unrelated word); the second token
/// is deliberately unanchored.
fn ordered_pair_in_segmented(segmented: &str, first: &str, second: &str) -> bool {
    let mut search_from = 0;
    while let Some(offset) = segmented[search_from..].find(first) {
        let start = search_from + offset;
        let at_boundary = start == 0 || segmented.as_bytes()[start - 1] == b'_';
        let end = start + first.len();

        if at_boundary && segmented[end..].contains(second) {
            return true;
        }

        // Advance past the first character of this occurrence (char-boundary
        // safe) so overlapping later occurrences are still considered.
        let step = segmented[start..]
            .chars()
            .next()
            .map_or(1, |c| c.len_utf8());
        search_from = start + step;
        if search_from >= segmented.len() {
            break;
        }
    }

    false
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
