//! Order types.
//!
//! An order is a committed instruction issued during a turn, queued on the
//! issuing player and drained later by the execution phase. Only deploy
//! orders are issued by this engine; the enum leaves room for the combat
//! and movement kinds owned by other phases.

use serde::{Deserialize, Serialize};

/// A queued player order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Deploy: place `armies` from the player's reinforcement pool onto
    /// `territory`. Validated against the pool at issue time.
    Deploy { territory: String, armies: u32 },
}

impl Order {
    /// Creates a deploy order.
    pub fn deploy(territory: &str, armies: u32) -> Self {
        Order::Deploy {
            territory: territory.to_string(),
            armies,
        }
    }

    /// Number of armies this order commits from the reinforcement pool.
    pub fn committed_armies(&self) -> u32 {
        match self {
            Order::Deploy { armies, .. } => *armies,
        }
    }
}
