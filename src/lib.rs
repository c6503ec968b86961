//! Hegemon engine library.
//!
//! The turn-setup and order-issuance core of a Risk-style conquest game:
//! roster management, randomized territory allocation, continent-ownership
//! derivation, reinforcement calculation, and deploy-order validation.
//! The surrounding game (map loading, command grammar, phase state machine,
//! order execution) lives in collaborating crates and drives this one
//! through `GameState`.

pub mod assign;
pub mod board;
pub mod deploy;
pub mod reinforce;
pub mod roster;
pub mod state;

pub use board::{Continent, GameMap, Order, Player, Territory};
pub use state::GameState;
