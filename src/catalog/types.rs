use std::fmt;

use serde::{Deserialize, Serialize};

/// Wireless technology family grouping bands. Serde names match the category
/// keys used by the product data pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    clap::ValueEnum,
)]
pub enum Standard {
    #[serde(rename = "5G NR")]
    #[strum(serialize = "5G NR")]
    Nr5g,
    #[serde(rename = "4G LTE")]
    #[strum(serialize = "4G LTE")]
    Lte,
    #[serde(rename = "NB-IoT")]
    #[strum(serialize = "NB-IoT")]
    NbIot,
    #[serde(rename = "WiFi")]
    #[strum(serialize = "WiFi")]
    Wifi,
    #[serde(rename = "GPS")]
    #[strum(serialize = "GPS")]
    Gps,
}

impl Standard {
    pub const ALL: [Standard; 5] = [
        Standard::Nr5g,
        Standard::Lte,
        Standard::NbIot,
        Standard::Wifi,
        Standard::Gps,
    ];

    /// Lookup by human name as used in the data files ("5G NR", "WiFi", ...).
    pub fn from_name(name: &str) -> Option<Standard> {
        Standard::ALL.into_iter().find(|s| s.to_string() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum DuplexMode {
    #[strum(serialize = "FDD")]
    Fdd,
    #[strum(serialize = "TDD")]
    Tdd,
    /// Supplementary downlink
    #[strum(serialize = "SDL")]
    Sdl,
    /// Supplementary uplink
    #[strum(serialize = "SUL")]
    Sul,
    /// Standalone downlink-only
    #[strum(serialize = "SDO")]
    Sdo,
}

/// Closed frequency interval in megahertz. Invariant: `min_mhz <= max_mhz`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyRange {
    pub min_mhz: f64,
    pub max_mhz: f64,
}

impl FrequencyRange {
    pub fn new(min_mhz: f64, max_mhz: f64) -> Self {
        Self { min_mhz, max_mhz }
    }

    /// True when this range fully encloses `other`, boundaries included.
    pub fn contains(&self, other: &FrequencyRange) -> bool {
        self.min_mhz <= other.min_mhz && self.max_mhz >= other.max_mhz
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_mhz, self.max_mhz)
    }
}

/// What an antenna must cover to support a band: all `required` ranges, plus
/// at least one of `alternatives` when that list is non-empty. A requirement
/// with no ranges at all can never be satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BandRequirement {
    pub required: Vec<FrequencyRange>,
    pub alternatives: Vec<FrequencyRange>,
}

impl BandRequirement {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.alternatives.is_empty()
    }
}

/// Raw authored band-plan row. Numeric requirements are derived from the
/// range strings once, at catalog construction.
#[derive(Debug, Clone, Copy)]
pub struct BandDef {
    pub band: &'static str,
    pub uplink: Option<&'static str>,
    pub downlink: Option<&'static str>,
    pub frequency: Option<&'static str>,
    pub frequencies: &'static [&'static str],
    pub mode: Option<DuplexMode>,
}

/// A named frequency allocation within a standard.
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    pub name: &'static str,
    pub standard: Standard,
    pub mode: Option<DuplexMode>,
    pub requirement: BandRequirement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_names_round_trip() {
        for standard in Standard::ALL {
            assert_eq!(Standard::from_name(&standard.to_string()), Some(standard));
        }
        assert_eq!(Standard::from_name("LTE"), None);
    }

    #[test]
    fn containment_requires_full_enclosure() {
        let antenna = FrequencyRange::new(698.0, 960.0);
        assert!(antenna.contains(&FrequencyRange::new(698.0, 960.0)));
        assert!(antenna.contains(&FrequencyRange::new(824.0, 894.0)));
        assert!(!antenna.contains(&FrequencyRange::new(617.0, 652.0)));
        assert!(!antenna.contains(&FrequencyRange::new(900.0, 970.0)));
    }
}
