use crate::model::{
    constants::{
        PLATFORM_OFFSET_PC, PLATFORM_OFFSET_PS, PLATFORM_OFFSET_XB, REGION_OFFSET_EU, REGION_OFFSET_NA
    },
    structures::{division::Division, platform::Platform, region::Region}
};

/// Fixed point offsets added to a team's skill average when scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub na: f64,
    pub eu: f64,
    pub pc: f64,
    pub ps: f64,
    pub xb: f64
}

impl Default for ScoreCard {
    fn default() -> Self {
        ScoreCard {
            na: REGION_OFFSET_NA,
            eu: REGION_OFFSET_EU,
            pc: PLATFORM_OFFSET_PC,
            ps: PLATFORM_OFFSET_PS,
            xb: PLATFORM_OFFSET_XB
        }
    }
}

impl ScoreCard {
    pub fn region_offset(&self, region: Region) -> f64 {
        match region {
            Region::Na => self.na,
            Region::Eu => self.eu
        }
    }

    pub fn platform_offset(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Pc => self.pc,
            Platform::Ps => self.ps,
            Platform::Xb => self.xb
        }
    }

    pub fn offset(&self, division: Division) -> f64 {
        self.region_offset(division.region) + self.platform_offset(division.platform)
    }
}
