//! Player state.
//!
//! A player is identified by name, unique modulo ASCII case within a game.
//! Owned territories, the derived owned-continent projection, the
//! reinforcement pool, and the pending-order queue all start empty; no
//! field is ever a "not yet assigned" sentinel.

use serde::{Deserialize, Serialize};

use super::order::Order;

/// One player in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Names of territories this player owns. Exclusive: a territory name
    /// appears in at most one player's list at any time.
    pub territories: Vec<String>,
    /// Names of continents this player fully controls. Derived projection,
    /// recomputed wholesale by `crate::assign::derive_continent_ownership`.
    pub continents: Vec<String>,
    /// Reinforcement armies granted this turn and not yet committed to an
    /// order.
    pub unallocated_armies: u32,
    /// Pending orders in issuance order, drained by the execution phase.
    pub orders: Vec<Order>,
}

impl Player {
    /// Creates a player with empty holdings, an empty order queue, and zero
    /// unallocated armies.
    pub fn new(name: &str) -> Self {
        Player {
            name: name.to_string(),
            territories: Vec::new(),
            continents: Vec::new(),
            unallocated_armies: 0,
            orders: Vec::new(),
        }
    }

    /// True if this player owns the named territory.
    pub fn owns_territory(&self, name: &str) -> bool {
        self.territories.iter().any(|t| t == name)
    }

    /// Pops the oldest pending order, FIFO. Used by the execution phase to
    /// drain the queue.
    pub fn next_order(&mut self) -> Option<Order> {
        if self.orders.is_empty() {
            None
        } else {
            Some(self.orders.remove(0))
        }
    }
}
