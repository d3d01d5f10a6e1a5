use std::{path::Path, sync::Once};

use scrim_roster::utils::test_utils::RowBuilder;

static INIT: Once = Once::new();

/// Initialize test logging at WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

pub fn header() -> String {
    (0..39).map(|i| format!("Question {}", i)).collect::<Vec<_>>().join(",")
}

/// Writes a sheet export: the header followed by one line per row.
pub fn write_sheet(path: &Path, rows: &[RowBuilder]) {
    let mut text = header();
    for row in rows {
        text.push('\n');
        text.push_str(&row.to_csv_line());
    }
    text.push('\n');

    std::fs::write(path, text).expect("Failed to write test sheet");
}

pub fn team(name: &str, region: &str, platform: &str, tag: &str, skill: i32) -> RowBuilder {
    RowBuilder::new(name, region, platform, &format!("{}-captain", name)).player(
        1,
        &format!("{}-disc", name),
        tag,
        &skill.to_string()
    )
}
