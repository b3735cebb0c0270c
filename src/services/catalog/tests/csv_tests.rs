use super::*;

const HEADER: &str = "name,voice_model,bio,col3,col4,col5,race,gender,species";

fn catalog_content(rows: &[&str]) -> String {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content
}

#[test]
fn test_parse_rows_skips_header() {
    let content = catalog_content(&["Ulfric Stormcloak,MaleNord,Jarl,,,,Nord,Male,Human"]);
    let rows = parse_rows(&content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Ulfric Stormcloak");
}

#[test]
fn test_parse_rows_quoted_field_with_comma() {
    let content = catalog_content(&[r#"Lydia,FemaleEvenToned,"Housecarl, sworn to Whiterun",,,,Nord,Female,Human"#]);
    let rows = parse_rows(&content);
    assert_eq!(rows[0][2], "Housecarl, sworn to Whiterun");
}

#[test]
fn test_parse_rows_doubled_quotes() {
    let content = catalog_content(&[r#"Cicero,MaleJester,"The ""Keeper"" of the Night Mother",,,,Imperial,Male,Human"#]);
    let rows = parse_rows(&content);
    assert_eq!(rows[0][2], r#"The "Keeper" of the Night Mother"#);
}

#[test]
fn test_parse_rows_quoted_field_with_newline() {
    let content = catalog_content(&[
        "Serana,FemaleCondescending,\"A vampire.\nLong asleep.\",,,,Nord,Female,Human",
        "Lydia,FemaleEvenToned,Housecarl,,,,Nord,Female,Human",
    ]);
    let rows = parse_rows(&content);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], "A vampire.\nLong asleep.");
    assert_eq!(rows[1][0], "Lydia");
}

#[test]
fn test_parse_rows_blank_rows_skipped() {
    let content = catalog_content(&["", ",,,,,,,,", "Lydia,FemaleEvenToned,,,,,Nord,Female,"]);
    let rows = parse_rows(&content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Lydia");
}

#[test]
fn test_parse_rows_malformed_quote_dropped() {
    let content = catalog_content(&[
        r#"Broken,"stray"quote,,,,,Nord,Male,"#,
        "Lydia,FemaleEvenToned,,,,,Nord,Female,",
    ]);
    let rows = parse_rows(&content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Lydia");
}

#[test]
fn test_parse_rows_crlf_line_endings() {
    let content = format!(
        "{HEADER}\r\nUlfric,MaleNord,,,,,Nord,Male,\r\nLydia,FemaleEvenToned,,,,,Nord,Female,\r\n"
    );
    let rows = parse_rows(&content);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "Lydia");
}

#[test]
fn test_read_character_rows_positional_mapping() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("skyrim_characters.csv");
    let content = catalog_content(&[
        "Ulfric Stormcloak, MaleNord , Jarl of Windhelm,x,y,z, Nord , Male , Human ",
    ]);
    std::fs::write(&path, content).unwrap();

    let records = read_character_rows(&path).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Ulfric Stormcloak");
    assert_eq!(record.voice_model, "MaleNord");
    assert_eq!(record.bio, "Jarl of Windhelm");
    assert_eq!(record.race, "Nord");
    assert_eq!(record.gender, "Male");
    assert_eq!(record.species, "Human");
}

#[test]
fn test_short_rows_read_missing_columns_as_empty() {
    let content = catalog_content(&["Ulfric,MaleNord"]);
    let rows = parse_rows(&content);
    let record = &read_rows_as_records(&rows)[0];
    assert_eq!(record.name, "Ulfric");
    assert_eq!(record.voice_model, "MaleNord");
    assert_eq!(record.race, "");
    assert_eq!(record.gender, "");
    assert_eq!(record.species, "");
}

fn read_rows_as_records(rows: &[Vec<String>]) -> Vec<CharacterRecord> {
    rows.iter().map(|row| super::row_to_record(row)).collect()
}

#[test]
fn test_empty_content() {
    assert!(parse_rows("").is_empty());
    assert!(parse_rows(HEADER).is_empty());
}
