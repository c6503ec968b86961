//! Player roster management and phase-gate predicates.
//!
//! The roster is an ordered list of players with names unique modulo ASCII
//! case. Mutation follows copy semantics: `add_or_remove` builds a new
//! roster from the caller's and never touches the input, so a rejected
//! operation provably leaves state unchanged. The predicates at the bottom
//! are pure boolean gates the phase state machine consults between turns.

use thiserror::Error;

use crate::board::player::Player;
use crate::state::GameState;

/// Errors from roster operations.
///
/// All variants are recoverable notices: the caller's roster is untouched
/// and the orchestrator may re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid operation '{0}' on players list")]
    InvalidOperation(String),

    #[error("player with name '{0}' already exists, no changes made")]
    DuplicateName(String),

    #[error("player with name '{0}' does not exist, no changes made")]
    UnknownName(String),

    #[error("missing player name argument")]
    MissingName,

    #[error("load the map before adding or removing players")]
    MapNotLoaded,
}

/// True if no existing player's name matches `name`, ignoring ASCII case.
pub fn is_name_unique(players: &[Player], name: &str) -> bool {
    !players.iter().any(|p| p.name.eq_ignore_ascii_case(name))
}

/// Applies an `add` or `remove` operation to a copy of the roster.
///
/// The player name is the first whitespace-delimited token of `argument`;
/// trailing tokens are the calling grammar's business and are ignored here.
/// The operation keyword is matched case-insensitively. On any error the
/// caller's roster is left exactly as it was.
pub fn add_or_remove(
    players: &[Player],
    operation: &str,
    argument: &str,
) -> Result<Vec<Player>, RosterError> {
    let name = argument
        .split_whitespace()
        .next()
        .ok_or(RosterError::MissingName)?;

    let mut updated = players.to_vec();
    match operation.to_ascii_lowercase().as_str() {
        "add" => {
            if !is_name_unique(players, name) {
                return Err(RosterError::DuplicateName(name.to_string()));
            }
            updated.push(Player::new(name));
        }
        "remove" => {
            if is_name_unique(players, name) {
                return Err(RosterError::UnknownName(name.to_string()));
            }
            updated.retain(|p| !p.name.eq_ignore_ascii_case(name));
        }
        other => return Err(RosterError::InvalidOperation(other.to_string())),
    }
    Ok(updated)
}

/// Controller entry point: updates the game state's roster.
///
/// Requires a loaded map; on success installs the updated roster into
/// `state`, on error leaves `state` untouched and returns the notice.
pub fn update_players(
    state: &mut GameState,
    operation: &str,
    argument: &str,
) -> Result<(), RosterError> {
    if !map_loaded(state) {
        eprintln!("load the map first to add player: {}", argument);
        return Err(RosterError::MapNotLoaded);
    }
    let updated = add_or_remove(&state.players, operation, argument)?;
    state.players = updated;
    Ok(())
}

/// True if at least one player has been added. Emits a guidance notice on
/// false so the orchestrator's prompt can relay it.
pub fn players_available(state: &GameState) -> bool {
    if state.players.is_empty() {
        eprintln!("add players before assigning territories");
        return false;
    }
    true
}

/// True if a map catalog has been installed.
pub fn map_loaded(state: &GameState) -> bool {
    state.map.is_some()
}

/// True if any player still has pending orders in their queue.
pub fn unexecuted_orders_exist(players: &[Player]) -> bool {
    players.iter().map(|p| p.orders.len()).sum::<usize>() != 0
}

/// True if any player still has unallocated reinforcement armies.
pub fn unassigned_armies_exist(players: &[Player]) -> bool {
    players.iter().map(|p| p.unallocated_armies).sum::<u32>() != 0
}
