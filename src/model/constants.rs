// Score offsets. Bands are wide enough that no skill average crosses into the
// next (region, platform) band, so sorting by score keeps divisions contiguous.
pub const REGION_OFFSET_NA: f64 = 0.0;
pub const REGION_OFFSET_EU: f64 = 15000.0;
pub const PLATFORM_OFFSET_PC: f64 = 0.0;
pub const PLATFORM_OFFSET_PS: f64 = 5000.0;
pub const PLATFORM_OFFSET_XB: f64 = 10000.0;

// Sign-up form answers
pub const AMERICAS_MARKER: &str = "Americas";
pub const PC_ANSWER: &str = "PC (Battle.net)";
pub const PLAYSTATION_ANSWER: &str = "Playstation 4";
pub const EXTRA_PLAYER_ANSWER: &str = "Yes";

pub const TAG_COLUMN_WIDTH: usize = 20;
