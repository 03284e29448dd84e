use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::catalog::Standard;
use crate::search::SearchError;

/// Bands chosen per standard for one search request. Transient: rebuilt for
/// every query, typically handed over by the UI layer as plain data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    bands: BTreeMap<Standard, Vec<String>>,
}

impl Selection {
    /// Parse a selection from YAML keyed by standard name, e.g.
    /// `5G NR: [n1, n78]`. An empty document is an empty selection.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SearchError> {
        if yaml.trim().is_empty() {
            return Ok(Selection::default());
        }
        let selection = serde_yaml::from_str(yaml)?;
        Ok(selection)
    }

    pub fn from_file(path: &str) -> Result<Self, SearchError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn select(&mut self, standard: Standard, name: impl Into<String>) {
        self.bands.entry(standard).or_default().push(name.into());
    }

    /// A selection with no band names anywhere is inert: the filter passes
    /// every product. Standards mapped to empty lists do not count.
    pub fn is_empty(&self) -> bool {
        self.bands.values().all(|names| names.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Standard, &[String])> {
        self.bands
            .iter()
            .map(|(standard, names)| (*standard, names.as_slice()))
    }
}
