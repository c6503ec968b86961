//! Territory catalog entries.
//!
//! A territory is the smallest ownable unit on the board. The catalog is
//! supplied by the map-loading collaborator and is read-only to this engine;
//! the current owner is a derived relation (see `GameState::owner_of`), not
//! a field stored here.

use serde::{Deserialize, Serialize};

/// A territory (country) on the game map.
///
/// Identity is the name, unique across the whole map. Each territory belongs
/// to exactly one continent, fixed by the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub continent: String,
}

impl Territory {
    /// Creates a territory belonging to the named continent.
    pub fn new(name: &str, continent: &str) -> Self {
        Territory {
            name: name.to_string(),
            continent: continent.to_string(),
        }
    }
}
