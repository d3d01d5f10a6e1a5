use std::fmt;

use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::model::structures::{platform::Platform, region::Region};

/// A (region, platform) pairing. Teams only ever play within their division.
///
/// Ordering is the declared report order: NA before EU, then PC, PS, XB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Division {
    pub region: Region,
    pub platform: Platform
}

impl Division {
    pub fn new(region: Region, platform: Platform) -> Division {
        Division { region, platform }
    }

    /// All divisions in report order.
    pub fn all() -> Vec<Division> {
        iproduct!(Region::iter(), Platform::iter())
            .map(|(region, platform)| Division::new(region, platform))
            .collect()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.region.to_string().to_uppercase(),
            self.platform.to_string().to_uppercase()
        )
    }
}
