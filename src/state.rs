//! Game state aggregate.
//!
//! Holds the map catalog and the player roster for one game. The
//! orchestrating phase state machine owns a `GameState` and passes it to
//! engine operations by reference; every mutation happens in place here.

use crate::board::map::GameMap;
use crate::board::player::Player;

/// Complete engine-visible state of one game.
///
/// `map` is `None` until the map-loading collaborator installs a catalog;
/// the roster is simply empty before any players are added.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub map: Option<GameMap>,
    pub players: Vec<Player>,
}

impl GameState {
    /// Creates a state with no map and no players.
    pub fn new() -> Self {
        GameState {
            map: None,
            players: Vec::new(),
        }
    }

    /// Installs the map catalog for this game.
    pub fn set_map(&mut self, map: GameMap) {
        self.map = Some(map);
    }

    /// Returns the name of the player owning the named territory, or `None`
    /// if it is unassigned. Ownership is derived from the per-player lists,
    /// which assignment keeps exclusive.
    pub fn owner_of(&self, territory: &str) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.owns_territory(territory))
            .map(|p| p.name.as_str())
    }

    /// Looks up a player by name, ASCII case-insensitively.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`GameState::player`].
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
