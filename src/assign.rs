//! Territory distribution and continent-ownership derivation.
//!
//! Runs once at game start: partitions the whole catalog across the roster
//! with uniform draws from a shrinking pool, then hands out any leftover one
//! territory per player per pass so no player ends more than one ahead of
//! another. The randomness source is passed in explicitly so tests can seed
//! it.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

use crate::board::continent::Continent;
use crate::board::player::Player;
use crate::roster::players_available;
use crate::state::GameState;

/// Precondition failures for assignment operations. The operation aborts
/// before any state change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("add players before assigning territories")]
    NoPlayers,

    #[error("no map loaded")]
    MapNotLoaded,
}

/// Randomly partitions every territory in the catalog across the roster,
/// then derives continent ownership from the result.
///
/// Each player receives `floor(total / players)` territories in the first
/// pass; leftovers are redistributed one per player in roster order until
/// the pool is empty. Draws are uniform and without replacement, so no
/// territory is ever assigned twice.
pub fn assign_territories(state: &mut GameState, rng: &mut SmallRng) -> Result<(), AssignError> {
    if !players_available(state) {
        return Err(AssignError::NoPlayers);
    }
    let GameState { map, players } = state;
    let map = map.as_ref().ok_or(AssignError::MapNotLoaded)?;

    let mut pool: Vec<String> = map.territories.iter().map(|t| t.name.clone()).collect();
    let share = pool.len() / players.len();
    distribute(share, &mut pool, players, rng);
    derive_continent_ownership(players, &map.continents);
    Ok(())
}

/// One pass hands each player up to `share` territories; subsequent passes
/// hand out one each until the pool empties. An explicit loop rather than
/// recursion so stack depth stays flat for large catalogs.
fn distribute(mut share: usize, pool: &mut Vec<String>, players: &mut [Player], rng: &mut SmallRng) {
    loop {
        for player in players.iter_mut() {
            for _ in 0..share {
                if pool.is_empty() {
                    break;
                }
                let idx = rng.gen_range(0..pool.len());
                player.territories.push(pool.swap_remove(idx));
            }
        }
        if pool.is_empty() {
            break;
        }
        share = 1;
    }
}

/// Recomputes every player's owned-continent projection from scratch.
///
/// A continent is owned iff the player's owned-territory set contains every
/// member territory. Always a wholesale recompute: incremental patching
/// goes stale the moment ownership changes through capture.
pub fn derive_continent_ownership(players: &mut [Player], continents: &[Continent]) {
    for player in players.iter_mut() {
        player.continents.clear();
        let owned: HashSet<&str> = player.territories.iter().map(String::as_str).collect();
        for continent in continents {
            if continent.territories.iter().all(|t| owned.contains(t.as_str())) {
                player.continents.push(continent.name.clone());
            }
        }
    }
}
