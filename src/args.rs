use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "scrim-roster",
    display_name = "Scrim Roster",
    about = "Builds scrim rosters from a team sign-up sheet",
    long_about = "Validates a team sign-up sheet export, ranks the teams by average skill \
    within each region and platform, and writes a readable roster and a tab separated \
    roster for importing."
)]
pub struct Args {
    /// Sign-up sheet export (latin-1 encoded, first row is the header)
    pub input: PathBuf,

    /// Human readable roster
    #[arg(default_value = "pretty-output.txt")]
    pub pretty_output: PathBuf,

    /// Tab separated roster for importing
    #[arg(default_value = "importable-output.txt")]
    pub importable_output: PathBuf,

    /// Cell delimiter of the sheet export
    #[arg(short, long, default_value_t = ',', value_parser = parse_delimiter)]
    pub delimiter: char,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        // parse_delimiter only accepts ASCII
        self.delimiter as u8
    }
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some('\\'), Some('t')) if value.len() == 2 => Ok('\t'),
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", value))
    }
}
