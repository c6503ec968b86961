//! Continent catalog entries.
//!
//! A continent is a fixed grouping of territories that grants a bonus army
//! value when one player controls every member territory. Whether a player
//! owns a continent is derived from set containment (see `crate::assign`),
//! never stored authoritatively here.

use serde::{Deserialize, Serialize};

/// A continent: a named group of territories with a control bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
    /// Armies granted per turn to a player controlling every member territory.
    pub bonus: u32,
    /// Names of the member territories, fixed by the map.
    pub territories: Vec<String>,
}

impl Continent {
    /// Creates a continent with no member territories yet.
    pub fn new(name: &str, bonus: u32) -> Self {
        Continent {
            name: name.to_string(),
            bonus,
            territories: Vec::new(),
        }
    }

    /// Appends a member territory by name.
    pub fn add_territory(&mut self, territory: &str) {
        self.territories.push(territory.to_string());
    }
}
