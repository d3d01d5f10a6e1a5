use scrim_roster::{error::RosterError, generate_reports};

use crate::common::{init_test_env, team, write_sheet};

#[test]
fn test_single_team_end_to_end() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    write_sheet(&input, &[team("TeamName", "Americas", "PC (Battle.net)", "Tag#1", 4000)]);

    let reports = generate_reports(&input, b',').unwrap();

    assert_eq!(
        reports.pretty,
        "\n========== NA - PC =========\n\
         TeamName\tTeam Captain: TeamName-captain\n\
         ```Tag#1               TeamName-disc\n\
         ```\n"
    );
    assert_eq!(
        reports.importable,
        "\n~~~~~~~~~~~~~~~~ NA - PC ~~~~~~~~~~~~~~~~\n\
         TeamName\tTeamName-captain\t4000\tNA - PC\n\
         Tag#1\tTeamName-disc\t4000\n\n"
    );
}

#[test]
fn test_divisions_in_report_order() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    write_sheet(
        &input,
        &[
            team("Xbox EU", "Europe", "Xbox One", "Tag#1", 3000),
            team("PC NA strong", "North & South Americas", "PC (Battle.net)", "Tag#2", 4200),
            team("PS NA", "Americas", "Playstation 4", "Tag#3", 2500),
            team("PC NA weak", "Americas", "PC (Battle.net)", "Tag#4", 2100),
        ]
    );

    let reports = generate_reports(&input, b',').unwrap();

    let banners = reports
        .pretty
        .lines()
        .filter(|l| l.starts_with("=========="))
        .collect::<Vec<_>>();
    assert_eq!(
        banners,
        vec![
            "========== NA - PC =========",
            "========== NA - PS =========",
            "========== EU - XB ========="
        ]
    );

    let weak = reports.importable.find("PC NA weak\t").unwrap();
    let strong = reports.importable.find("PC NA strong\t").unwrap();
    assert!(weak < strong);
}

#[test]
fn test_spacer_rows_are_skipped() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    let mut text = crate::common::header();
    text.push('\n');
    text.push_str(&team("Alpha", "Americas", "PC (Battle.net)", "Tag#1", 1000).to_csv_line());
    text.push_str("\n,,,,\n");
    std::fs::write(&input, text).unwrap();

    let reports = generate_reports(&input, b',').unwrap();

    assert_eq!(reports.importable.matches("NA - PC\n").count(), 1);
}

#[test]
fn test_latin1_round_trip() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    write_sheet(&input, &[team("Caf", "Europe", "PC (Battle.net)", "Tag#1", 1000)]);
    // Swap the team name for a latin-1 encoded "Café"
    let bytes = std::fs::read(&input).unwrap();
    let text = String::from_utf8(bytes).unwrap().replacen("\"Caf\"", "\"Caf\u{0}\"", 1);
    let mut bytes = text.into_bytes();
    let nul = bytes.iter().position(|b| *b == 0).unwrap();
    bytes[nul] = 0xE9;
    std::fs::write(&input, bytes).unwrap();

    let reports = generate_reports(&input, b',').unwrap();

    assert!(reports.pretty.contains("Café\tTeam Captain: Caf-captain"));
}

#[test]
fn test_semicolon_delimiter() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    let line = team("Alpha", "Americas", "PC (Battle.net)", "Tag#1", 1000)
        .to_csv_line()
        .replace("\",\"", "\";\"");
    std::fs::write(&input, format!("{}\n{}\n", crate::common::header().replace(',', ";"), line)).unwrap();

    let reports = generate_reports(&input, b';').unwrap();

    assert!(reports.importable.contains("Alpha\tAlpha-captain\t1000\tNA - PC\n"));
}

#[test]
fn test_duplicate_tag_reports_both_cells() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    write_sheet(
        &input,
        &[
            team("Alpha", "Americas", "PC (Battle.net)", "Tag#1234", 1000),
            team("Beta", "Europe", "Xbox One", "Tag#1234", 2000),
        ]
    );

    let err = generate_reports(&input, b',').unwrap_err();

    assert!(matches!(err, RosterError::DuplicateTag { .. }));
    let message = err.to_string();
    assert!(message.contains("H2"), "{}", message);
    assert!(message.contains("H3"), "{}", message);
}

#[test]
fn test_header_only_sheet_is_empty_roster() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signups.csv");
    write_sheet(&input, &[]);

    assert!(matches!(generate_reports(&input, b','), Err(RosterError::EmptyRoster)));
}

#[test]
fn test_missing_input() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();

    let err = generate_reports(&dir.path().join("nope.csv"), b',').unwrap_err();

    assert!(matches!(err, RosterError::Io { .. }));
}
