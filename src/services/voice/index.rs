//! Installed voice-model index.
//!
//! Built once from the raw filename stems of the active provider's model
//! directory and rebuilt in full whenever the directory listing changes.
//! Exposes the ordered candidate list consumed by the resolver and the
//! validity key set used to test already-assigned voice-model strings.

use std::collections::HashSet;

use crate::services::voice::normalizer::{normalize_contains, normalize_segmented};

/// One installed voice model, in the forms the matcher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidate {
    /// Lowercase alphanumeric-only form, for substring containment.
    pub normalized_contains: String,
    /// Length-preserving form with non-alphanumerics collapsed to `_`,
    /// for boundary-anchored ordered matching.
    pub normalized_segmented: String,
    /// Human-readable name, e.g. `MaleNordCommon`. This exact convention is
    /// persisted in override records and must not drift.
    pub display_name: String,
}

/// Candidate list plus validity key set for the active provider.
#[derive(Debug, Clone, Default)]
pub struct VoiceModelIndex {
    candidates: Vec<ModelCandidate>,
    validity_keys: HashSet<String>,
}

impl VoiceModelIndex {
    /// Build the index from raw model filename stems.
    ///
    /// `prefix_strip` is a provider naming-convention prefix (e.g. `sk_` for
    /// xVA-Synth Skyrim models) removed case-insensitively before anything
    /// else. Stems that normalize to nothing are discarded. Candidates are
    /// de-duplicated by display name (case-insensitive, first seen wins) and
    /// then sorted by display name for listing.
    pub fn build(model_tokens: &[String], prefix_strip: Option<&str>) -> Self {
        let mut candidates: Vec<ModelCandidate> = Vec::new();
        let mut seen_display: HashSet<String> = HashSet::new();

        for token in model_tokens {
            let token = strip_prefix_ci(token, prefix_strip);
            if normalize_contains(token).is_empty() {
                continue;
            }

            let display_name = display_name_for(token);
            if !seen_display.insert(display_name.to_lowercase()) {
                continue;
            }

            // The matcher forms come from the raw token: the segmented form
            // needs the token's own separators as boundary anchors.
            candidates.push(ModelCandidate {
                normalized_contains: normalize_contains(token),
                normalized_segmented: normalize_segmented(token),
                display_name,
            });
        }

        candidates.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
        });

        // Validity keys come from the display names, not the raw tokens:
        // the display name is what gets assigned and persisted, and casing
        // can expand characters (ß -> SS) so the two forms may differ.
        let validity_keys = candidates
            .iter()
            .map(|c| normalize_contains(&c.display_name))
            .collect();

        Self {
            candidates,
            validity_keys,
        }
    }

    /// True iff `voice_model` is non-empty and names an installed model.
    ///
    /// Membership is tested on the contains form only; the segmented form is
    /// reserved for the resolver's ordered tiers.
    pub fn is_valid(&self, voice_model: &str) -> bool {
        if voice_model.trim().is_empty() {
            return false;
        }

        let key = normalize_contains(voice_model);
        !key.is_empty() && self.validity_keys.contains(&key)
    }

    pub fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sorted display names for listing in a model picker.
    pub fn display_names(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|c| c.display_name.clone())
            .collect()
    }
}

fn strip_prefix_ci<'a>(token: &'a str, prefix: Option<&str>) -> &'a str {
    let Some(prefix) = prefix else {
        return token;
    };

    match token.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &token[prefix.len()..],
        _ => token,
    }
}

/// Turn a filename stem into the persisted display convention:
/// `_`/`-` become word breaks, each word gets a leading capital, and the
/// words are joined without spaces (`male_nord common` -> `MaleNordCommon`).
fn display_name_for(token: &str) -> String {
    token
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
