use crate::catalog::{BandRequirement, FrequencyRange};

/// Does the antenna's coverage satisfy a band's range requirements?
///
/// Every required range must be fully contained by some antenna range
/// (containment, not mere overlap), and when alternatives exist at least one
/// of them must be contained as well. A requirement with no ranges at all is
/// unsatisfiable.
pub fn supports_band(antenna: &[FrequencyRange], requirement: &BandRequirement) -> bool {
    if requirement.is_empty() {
        return false;
    }

    for band_range in &requirement.required {
        if !covered_by_any(antenna, band_range) {
            return false;
        }
    }

    if !requirement.alternatives.is_empty()
        && !requirement
            .alternatives
            .iter()
            .any(|band_range| covered_by_any(antenna, band_range))
    {
        return false;
    }

    true
}

fn covered_by_any(antenna: &[FrequencyRange], band_range: &FrequencyRange) -> bool {
    antenna.iter().any(|a| a.contains(band_range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(ranges: &[(f64, f64)]) -> BandRequirement {
        BandRequirement {
            required: ranges
                .iter()
                .map(|&(min, max)| FrequencyRange::new(min, max))
                .collect(),
            alternatives: Vec::new(),
        }
    }

    fn alternatives(ranges: &[(f64, f64)]) -> BandRequirement {
        BandRequirement {
            required: Vec::new(),
            alternatives: ranges
                .iter()
                .map(|&(min, max)| FrequencyRange::new(min, max))
                .collect(),
        }
    }

    fn antenna(ranges: &[(f64, f64)]) -> Vec<FrequencyRange> {
        ranges
            .iter()
            .map(|&(min, max)| FrequencyRange::new(min, max))
            .collect()
    }

    #[test]
    fn exact_boundary_counts_as_contained() {
        assert!(supports_band(
            &antenna(&[(700.0, 800.0)]),
            &required(&[(700.0, 800.0)])
        ));
    }

    #[test]
    fn partial_overlap_is_not_enough() {
        assert!(!supports_band(
            &antenna(&[(700.0, 790.0)]),
            &required(&[(700.0, 800.0)])
        ));
    }

    #[test]
    fn each_required_range_may_use_a_different_antenna_range() {
        // FDD-style requirement with both halves inside the low antenna range
        let req = required(&[(699.0, 716.0), (729.0, 746.0)]);
        assert!(supports_band(&antenna(&[(698.0, 800.0), (1700.0, 2700.0)]), &req));
        // One half uncovered fails the whole band
        assert!(!supports_band(&antenna(&[(698.0, 740.0)]), &req));
    }

    #[test]
    fn any_single_alternative_is_enough() {
        let req = alternatives(&[(2400.0, 2500.0), (5150.0, 5875.0)]);
        assert!(supports_band(&antenna(&[(2400.0, 2500.0)]), &req));
        assert!(supports_band(&antenna(&[(5000.0, 6000.0)]), &req));
        assert!(!supports_band(&antenna(&[(5925.0, 7125.0)]), &req));
    }

    #[test]
    fn required_and_alternatives_combine() {
        let req = BandRequirement {
            required: vec![FrequencyRange::new(1000.0, 1100.0)],
            alternatives: vec![
                FrequencyRange::new(2000.0, 2100.0),
                FrequencyRange::new(3000.0, 3100.0),
            ],
        };
        assert!(supports_band(
            &antenna(&[(900.0, 1200.0), (2000.0, 2100.0)]),
            &req
        ));
        // Required satisfied but no alternative covered
        assert!(!supports_band(&antenna(&[(900.0, 1200.0)]), &req));
    }

    #[test]
    fn empty_requirement_is_never_satisfied() {
        assert!(!supports_band(
            &antenna(&[(0.0, 100000.0)]),
            &BandRequirement::default()
        ));
    }

    #[test]
    fn no_antenna_coverage_fails() {
        assert!(!supports_band(&[], &required(&[(700.0, 800.0)])));
    }
}
