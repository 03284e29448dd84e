use crate::catalog::BandCatalog;
use crate::matcher::{parse_frequency_spec, supports_band};
use crate::search::{Product, Selection};

/// Decide whether a product's frequency text satisfies a selection.
///
/// An empty selection passes everything. Otherwise every resolvable chosen
/// band, across every standard, must be supported (selecting more bands
/// narrows results, never widens them). Unknown band names are skipped so a
/// stale selection cannot exclude the whole catalog.
pub fn product_matches(catalog: &BandCatalog, frequency_spec: &str, selection: &Selection) -> bool {
    if selection.is_empty() {
        return true;
    }

    let antenna = parse_frequency_spec(frequency_spec);
    if antenna.is_empty() {
        // No parseable coverage: fail every non-empty selection
        return false;
    }

    for (standard, names) in selection.iter() {
        for name in names {
            let band = match catalog.get(standard, name) {
                Some(band) => band,
                None => {
                    log::debug!("Ignoring unknown {} band: {}", standard, name);
                    continue;
                }
            };
            if !supports_band(&antenna, &band.requirement) {
                return false;
            }
        }
    }

    true
}

/// Sweep a product list, keeping the products that satisfy the selection.
pub fn filter_products<'a>(
    catalog: &BandCatalog,
    products: &'a [Product],
    selection: &Selection,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| product_matches(catalog, p.frequency_spec(), selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Standard;

    fn selection(choices: &[(Standard, &str)]) -> Selection {
        let mut selection = Selection::default();
        for &(standard, name) in choices {
            selection.select(standard, name);
        }
        selection
    }

    #[test]
    fn empty_selection_passes_everything() {
        let catalog = BandCatalog::new();
        let empty = Selection::default();
        assert!(product_matches(&catalog, "698-960 MHz", &empty));
        assert!(product_matches(&catalog, "N/A", &empty));
        assert!(product_matches(&catalog, "", &empty));
    }

    #[test]
    fn unparseable_spec_fails_any_nonempty_selection() {
        let catalog = BandCatalog::new();
        let sel = selection(&[(Standard::Nr5g, "n1")]);
        assert!(!product_matches(&catalog, "N/A", &sel));
        assert!(!product_matches(&catalog, "", &sel));
    }

    #[test]
    fn single_band_containment_decides() {
        let catalog = BandCatalog::new();
        // n1 needs 1920-1980 and 2110-2170
        let sel = selection(&[(Standard::Nr5g, "n1")]);
        assert!(product_matches(&catalog, "1700-2200 MHz", &sel));
        assert!(!product_matches(&catalog, "1900-2000 MHz", &sel));
    }

    #[test]
    fn selecting_more_bands_narrows() {
        let catalog = BandCatalog::new();
        // n5 (824-849/869-894) is outside a 1700-2200 antenna
        let sel = selection(&[(Standard::Nr5g, "n1"), (Standard::Nr5g, "n5")]);
        assert!(!product_matches(&catalog, "1700-2200 MHz", &sel));
        assert!(product_matches(&catalog, "600-3000 MHz", &sel));
    }

    #[test]
    fn all_standards_in_the_selection_must_pass() {
        let catalog = BandCatalog::new();
        let sel = selection(&[(Standard::Nr5g, "n1"), (Standard::Gps, "L1")]);
        // Covers n1 but not GPS L1 (1560-1590)
        assert!(!product_matches(&catalog, "1700-2200 MHz", &sel));
        assert!(product_matches(&catalog, "1500-2200 MHz", &sel));
    }

    #[test]
    fn dual_band_wifi_needs_any_one_alternative() {
        let catalog = BandCatalog::new();
        let sel = selection(&[(Standard::Wifi, "802.11n")]);
        assert!(product_matches(&catalog, "2400-2500 MHz", &sel));
        // 6 GHz only is neither of 802.11n's alternatives
        assert!(!product_matches(&catalog, "5925-7125 MHz", &sel));
    }

    #[test]
    fn unknown_band_names_are_skipped() {
        let catalog = BandCatalog::new();
        let sel = selection(&[(Standard::Nr5g, "n999-typo")]);
        // Behaves like an empty constraint for parseable products
        assert!(product_matches(&catalog, "698-960 MHz", &sel));
        // but the selection itself is still non-empty
        assert!(!product_matches(&catalog, "N/A", &sel));
    }

    #[test]
    fn filter_keeps_only_matching_products() {
        let catalog = BandCatalog::new();
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                { "id": "A", "name": "Cellular", "specs": { "Frequency range": "600-3000 MHz" } },
                { "id": "B", "name": "GPS patch", "specs": { "Frequency range": "1560-1610 MHz" } },
                { "id": "C", "name": "No spec", "specs": {} }
            ]"#,
        )
        .unwrap();

        let sel = selection(&[(Standard::Gps, "L1")]);
        let kept: Vec<_> = filter_products(&catalog, &products, &sel)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(kept, vec!["A", "B"]);
    }
}
