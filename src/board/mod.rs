//! Board representation types.
//!
//! Contains the core data structures for territories, continents, the map
//! catalog, players, and orders.

pub mod continent;
pub mod map;
pub mod order;
pub mod player;
pub mod territory;

pub use continent::Continent;
pub use map::GameMap;
pub use order::Order;
pub use player::Player;
pub use territory::Territory;
