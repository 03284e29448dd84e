use std::collections::HashMap;

use super::tables::band_plan;
use super::types::{Band, BandDef, BandRequirement, FrequencyRange, Standard};

/// All known bands across all standards, with numeric range requirements
/// derived once at construction. Immutable afterwards, safe to share.
pub struct BandCatalog {
    bands: HashMap<Standard, Vec<Band>>,
}

impl BandCatalog {
    pub fn new() -> Self {
        let mut bands = HashMap::new();
        for standard in Standard::ALL {
            let derived = band_plan(standard)
                .iter()
                .map(|def| derive_band(standard, def))
                .collect();
            bands.insert(standard, derived);
        }
        Self { bands }
    }

    /// Bands of a standard in authored order.
    pub fn bands(&self, standard: Standard) -> &[Band] {
        self.bands
            .get(&standard)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Case-sensitive exact lookup by band name.
    pub fn get(&self, standard: Standard, name: &str) -> Option<&Band> {
        self.bands(standard).iter().find(|b| b.name == name)
    }
}

impl Default for BandCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_band(standard: Standard, def: &BandDef) -> Band {
    let mut requirement = BandRequirement::default();

    // Uplink and downlink are both mandatory where present; an FDD band
    // therefore requires its two duplex halves independently.
    if let Some(range) = def.uplink.and_then(parse_plan_range) {
        requirement.required.push(range);
    }
    if let Some(range) = def.downlink.and_then(parse_plan_range) {
        requirement.required.push(range);
    }
    if let Some(range) = def.frequency.and_then(parse_plan_range) {
        requirement.required.push(range);
    }
    // Alternative hardware generations: covering any one is enough.
    for freq in def.frequencies {
        if let Some(range) = parse_plan_range(freq) {
            requirement.alternatives.push(range);
        }
    }

    if requirement.is_empty() {
        // Such a band can never be satisfied by any antenna.
        log::warn!("Band {} ({}) has no usable ranges", def.band, standard);
    }

    Band {
        name: def.band,
        standard,
        mode: def.mode,
        requirement,
    }
}

/// Parse a "low-high" plan string. A bare number yields a degenerate
/// single-frequency range; anything unparseable yields nothing.
fn parse_plan_range(s: &str) -> Option<FrequencyRange> {
    match s.split_once('-') {
        Some((lo, hi)) => {
            let min = lo.trim().parse().ok()?;
            let max = hi.trim().parse().ok()?;
            Some(FrequencyRange::new(min, max))
        }
        None => {
            let value: f64 = s.trim().parse().ok()?;
            Some(FrequencyRange::new(value, value))
        }
    }
}
