use serde::Deserialize;

use crate::core::{
    errors::HoneymoonError,
    models::Destination,
};

/// The embedded destination list. Display order in the deck follows document
/// order.
const CATALOG_JSON: &str = include_str!("../../assets/destinations.json");

#[derive(Deserialize)]
struct CatalogDocument {
    destinations: Vec<Destination>,
}

/// The full, static, ordered list of destinations the deck cycles through.
/// Built once at startup and read-only afterwards; every lookup wraps modulo
/// the catalog size, so it can never be exhausted.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Parses the embedded catalog document. An empty catalog is a
    /// configuration error and refuses to start up.
    pub fn load() -> Result<Self, HoneymoonError> {
        let document: CatalogDocument = serde_json::from_str(CATALOG_JSON)?;
        Self::from_destinations(document.destinations)
    }

    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self, HoneymoonError> {
        if destinations.is_empty() {
            return Err(HoneymoonError::EmptyCatalog);
        }

        Ok(Self { destinations })
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// The destination at `cursor mod len`. The cursor grows monotonically in
    /// the deck; wraparound happens here.
    pub fn cycle(&self, cursor: usize) -> &Destination {
        &self.destinations[cursor % self.destinations.len()]
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }
}
