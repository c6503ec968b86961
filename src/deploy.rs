//! Deploy order validation and queuing.
//!
//! The single place armies move from a player's unallocated pool into
//! committed orders. A deploy request must not exceed the pool; a rejected
//! request changes nothing. Command text arrives pre-tokenized by the
//! command grammar as `deploy <territory> <count>`, but callers holding the
//! pieces can use [`queue_deploy`] directly.

use thiserror::Error;

use crate::board::order::Order;
use crate::board::player::Player;

/// Errors from deploy order issuance.
///
/// `MalformedCommand` and `MalformedArmyCount` are structural input faults;
/// `ExceedsUnallocated` is the validation rejection. All leave the player
/// untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeployError {
    #[error("deploy command needs a territory and an army count: '{0}'")]
    MalformedCommand(String),

    #[error("army count '{0}' is not a whole number")]
    MalformedArmyCount(String),

    #[error("deploy of {requested} armies exceeds {available} unallocated armies")]
    ExceedsUnallocated { requested: u32, available: u32 },
}

/// True if deploying `armies` would overdraw the player's unallocated pool.
pub fn exceeds_unallocated(player: &Player, armies: u32) -> bool {
    player.unallocated_armies < armies
}

/// Parses a `deploy <territory> <count>` command and queues the order.
///
/// The leading keyword was already recognized by the command grammar; it is
/// accepted and skipped here. Non-numeric counts fail with the distinct
/// malformed-input kind so the orchestrator can tell them apart from a
/// validation rejection.
pub fn create_deploy_order(command: &str, player: &mut Player) -> Result<(), DeployError> {
    let tokens: Vec<&str> = command.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(DeployError::MalformedCommand(command.to_string()));
    }
    let territory = tokens[1];
    let armies: u32 = tokens[2]
        .parse()
        .map_err(|_| DeployError::MalformedArmyCount(tokens[2].to_string()))?;

    queue_deploy(player, territory, armies)
}

/// Validates a deploy of `armies` onto `territory` and appends it to the
/// player's order queue, debiting the unallocated pool.
pub fn queue_deploy(player: &mut Player, territory: &str, armies: u32) -> Result<(), DeployError> {
    if exceeds_unallocated(player, armies) {
        return Err(DeployError::ExceedsUnallocated {
            requested: armies,
            available: player.unallocated_armies,
        });
    }
    player.orders.push(Order::deploy(territory, armies));
    player.unallocated_armies -= armies;
    Ok(())
}
