use super::*;

#[test]
fn test_normalize_contains_basic() {
    assert_eq!(normalize_contains("Ulfric Stormcloak"), "ulfricstormcloak");
    assert_eq!(normalize_contains("Male Nord Common"), "malenordcommon");
}

#[test]
fn test_normalize_contains_strips_symbols() {
    assert_eq!(normalize_contains("sk_male-nord.v2"), "skmalenordv2");
    assert_eq!(normalize_contains("J'zargo"), "jzargo");
}

#[test]
fn test_normalize_contains_empty_and_whitespace() {
    assert_eq!(normalize_contains(""), "");
    assert_eq!(normalize_contains("   \t "), "");
    assert_eq!(normalize_contains("!!!"), "");
}

#[test]
fn test_normalize_contains_idempotent() {
    let once = normalize_contains("Maven Black-Briar");
    assert_eq!(normalize_contains(&once), once);
}

#[test]
fn test_normalize_contains_only_lowercase_alphanumeric() {
    let out = normalize_contains("A-b_C 9!");
    assert!(out.chars().all(|c| c.is_lowercase() || c.is_ascii_digit()));
    assert_eq!(out, "abc9");
}

#[test]
fn test_normalize_segmented_basic() {
    assert_eq!(normalize_segmented("Male_Nord Common"), "male_nord_common");
    assert_eq!(normalize_segmented("sk-female.nord"), "sk_female_nord");
}

#[test]
fn test_normalize_segmented_preserves_length() {
    for s in ["MaleNordCommon", "a b-c_d", " padded ", "x!y?z"] {
        let out = normalize_segmented(s);
        assert_eq!(out.chars().count(), s.chars().count(), "input: {s:?}");
        assert!(out
            .chars()
            .all(|c| c == '_' || c.is_lowercase() || c.is_ascii_digit()));
    }
}

#[test]
fn test_normalize_segmented_empty_and_whitespace() {
    assert_eq!(normalize_segmented(""), "");
    assert_eq!(normalize_segmented("  \n"), "");
}

// The contains form is the segmented form with underscores removed.
#[test]
fn test_forms_agree_modulo_underscores() {
    for s in ["Ulfric Stormcloak", "sk_MaleNordEventoned", "a!b@c#1"] {
        let segmented: String = normalize_segmented(s)
            .chars()
            .filter(|c| *c != '_')
            .collect();
        assert_eq!(segmented, normalize_contains(s), "input: {s:?}");
    }
}
