use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

use crate::search::SearchError;

/// Spec key under which the data pipeline stores a product's frequency text.
pub const FREQUENCY_RANGE_KEY: &str = "Frequency range";

/// A catalog product as produced by the upstream data pipeline. Only read
/// here; the admin side owns the records.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub specs: HashMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The free-text frequency specification, empty when absent.
    pub fn frequency_spec(&self) -> &str {
        self.specs
            .get(FREQUENCY_RANGE_KEY)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn matches_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Case-insensitive substring search over the simple-search fields.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.frequency_spec().to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Load a product catalog file (JSON array of products).
pub fn load_products(path: &str) -> Result<Vec<Product>, SearchError> {
    let content = fs::read_to_string(path)?;
    let products = serde_json::from_str(&content)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"{
                "id": "ANT-100",
                "name": "Wideband cellular antenna",
                "description": "Embedded LTE antenna",
                "category": "Embedded antennas",
                "specs": { "Frequency range": "698-960 MHz, 1710-2690 MHz" },
                "tags": ["LTE", "SMD"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn frequency_spec_reads_the_well_known_key() {
        assert_eq!(sample().frequency_spec(), "698-960 MHz, 1710-2690 MHz");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let product: Product =
            serde_json::from_str(r#"{ "id": "ANT-1", "name": "Bare" }"#).unwrap();
        assert_eq!(product.frequency_spec(), "");
        assert!(product.category.is_none());
        assert!(product.tags.is_empty());
    }

    #[test]
    fn query_matches_name_tags_and_spec_text() {
        let product = sample();
        assert!(product.matches_query("wideband"));
        assert!(product.matches_query("smd"));
        assert!(product.matches_query("2690"));
        assert!(!product.matches_query("gps"));
    }

    #[test]
    fn category_match_is_exact() {
        let product = sample();
        assert!(product.matches_category("Embedded antennas"));
        assert!(!product.matches_category("Cables"));
    }
}
