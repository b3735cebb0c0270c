//! Text normalization for voice-model and character attribute matching.
//!
//! Two canonical forms are produced from the same input:
//! - the *contains* form, used for substring and validity membership checks;
//! - the *segmented* form, used for boundary-anchored ordered matching.

/// Normalize text for substring containment checks.
///
/// Keeps only letters and digits, lowercased, concatenated. Whitespace-only
/// input yields an empty string. Total and idempotent.
pub fn normalize_contains(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Normalize text for boundary-anchored ordered matching.
///
/// Every letter/digit is lowercased in place; every other character becomes
/// a single `_`. Length and relative positions are preserved, so a token
/// occurrence can be anchored to position 0 or to the character right after
/// an underscore. Whitespace-only input yields an empty string.
pub fn normalize_segmented(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push('_');
        }
    }

    out
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
