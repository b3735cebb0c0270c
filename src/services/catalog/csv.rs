//! Minimal quoted-CSV reader for the character catalog.
//!
//! The catalog is comma-delimited with double-quoted fields; embedded commas,
//! doubled quotes and embedded newlines inside quotes are supported. The
//! first row is a header and is skipped; rows where every field is
//! whitespace are skipped; a malformed row is dropped with a warning and
//! parsing continues on the next line. Column mapping is positional and rows
//! short of a column read it as empty.

use std::fs;
use std::path::Path;

use crate::services::catalog::record::CharacterRecord;
use crate::types::AppResult;

const NAME_COLUMN: usize = 0;
const VOICE_MODEL_COLUMN: usize = 1;
const BIO_COLUMN: usize = 2;
const RACE_COLUMN: usize = 6;
const GENDER_COLUMN: usize = 7;
const SPECIES_COLUMN: usize = 8;

/// Read the catalog file into character records. Rows with an empty name
/// column are kept here and excluded later by `Catalog::from_records`.
pub fn read_character_rows(path: &Path) -> AppResult<Vec<CharacterRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_rows(&content)
        .into_iter()
        .map(|row| row_to_record(&row))
        .collect())
}

/// Parse CSV content into rows of fields, header skipped.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut malformed = false;
    let mut row_index = 0usize;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    // A closing quote must be followed by a delimiter.
                    if !matches!(chars.peek(), Some(',') | Some('\n') | Some('\r') | None) {
                        malformed = true;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                finish_row(
                    &mut rows,
                    &mut fields,
                    &mut field,
                    &mut malformed,
                    &mut row_index,
                );
            }
            '\n' => finish_row(
                &mut rows,
                &mut fields,
                &mut field,
                &mut malformed,
                &mut row_index,
            ),
            _ => field.push(c),
        }
    }

    if in_quotes {
        malformed = true;
    }
    if !field.is_empty() || !fields.is_empty() {
        finish_row(
            &mut rows,
            &mut fields,
            &mut field,
            &mut malformed,
            &mut row_index,
        );
    }

    rows
}

fn finish_row(
    rows: &mut Vec<Vec<String>>,
    fields: &mut Vec<String>,
    field: &mut String,
    malformed: &mut bool,
    row_index: &mut usize,
) {
    fields.push(std::mem::take(field));
    let row = std::mem::take(fields);
    let index = *row_index;
    *row_index += 1;

    if std::mem::take(malformed) {
        log::warn!("Skipping malformed catalog row {}", index + 1);
        return;
    }
    if index == 0 {
        return; // header
    }

    let has_any_value = row.iter().any(|f| !f.trim().is_empty());
    if has_any_value {
        rows.push(row);
    }
}

fn row_to_record(row: &[String]) -> CharacterRecord {
    CharacterRecord {
        name: column_value(row, NAME_COLUMN),
        voice_model: column_value(row, VOICE_MODEL_COLUMN),
        bio: column_value(row, BIO_COLUMN),
        race: column_value(row, RACE_COLUMN),
        gender: column_value(row, GENDER_COLUMN),
        species: column_value(row, SPECIES_COLUMN),
    }
}

/// Trimmed field at `index`, or empty when the row is too short.
fn column_value(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/csv_tests.rs"]
mod tests;
