//! The immutable map catalog.
//!
//! Bundles the territory and continent lists supplied by the map-loading
//! collaborator. Graph validity (connectivity of continents and countries)
//! is that collaborator's responsibility; this engine only reads the
//! catalog. JSON is the interchange format at the seam.

use serde::{Deserialize, Serialize};

use super::continent::Continent;
use super::territory::Territory;

/// The full catalog of territories and continents for one game.
///
/// Immutable once loaded: every operation in this engine takes it by shared
/// reference and mutates only player-side state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub territories: Vec<Territory>,
    pub continents: Vec<Continent>,
}

impl GameMap {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        GameMap {
            territories: Vec::new(),
            continents: Vec::new(),
        }
    }

    /// Looks up a territory by exact name.
    pub fn territory(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }

    /// Looks up a continent by exact name.
    pub fn continent(&self, name: &str) -> Option<&Continent> {
        self.continents.iter().find(|c| c.name == name)
    }

    /// Parses a catalog from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the catalog to its JSON interchange form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}
