//! Reinforcement calculation.
//!
//! Once per reinforcement phase each player is granted armies from two
//! sources: a territory count bonus of `max(3, owned / 3)` (floor division,
//! zero if the player holds nothing) and the summed bonus values of every
//! continent they fully control. The grant overwrites the unallocated pool;
//! it never accumulates across turns.

use crate::board::map::GameMap;
use crate::board::player::Player;
use crate::state::GameState;

pub use crate::assign::AssignError;

/// Computes the army grant for one player.
///
/// The division uses floor. A player holding at least one territory never
/// receives fewer than 3 armies.
pub fn reinforcements_for(player: &Player, map: &GameMap) -> u32 {
    let mut armies = 0;
    if !player.territories.is_empty() {
        armies = u32::max(3, player.territories.len() as u32 / 3);
    }
    for name in &player.continents {
        if let Some(continent) = map.continent(name) {
            armies += continent.bonus;
        }
    }
    armies
}

/// Grants each player in the game their reinforcement armies, overwriting
/// any unallocated armies left from a previous turn.
pub fn assign_armies(state: &mut GameState) -> Result<(), AssignError> {
    let GameState { map, players } = state;
    let map = map.as_ref().ok_or(AssignError::MapNotLoaded)?;

    for player in players.iter_mut() {
        player.unallocated_armies = reinforcements_for(player, map);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::continent::Continent;
    use crate::board::territory::Territory;

    fn map_with_continent(name: &str, bonus: u32, members: &[&str]) -> GameMap {
        let mut cont = Continent::new(name, bonus);
        let mut territories = Vec::new();
        for m in members {
            cont.add_territory(m);
            territories.push(Territory::new(m, name));
        }
        GameMap {
            territories,
            continents: vec![cont],
        }
    }

    fn player_with_territories(n: usize) -> Player {
        let mut p = Player::new("Alice");
        for i in 0..n {
            p.territories.push(format!("T{}", i));
        }
        p
    }

    #[test]
    fn landless_player_gets_nothing() {
        let map = GameMap::new();
        assert_eq!(reinforcements_for(&Player::new("Alice"), &map), 0);
    }

    #[test]
    fn minimum_grant_is_three() {
        let map = GameMap::new();
        for n in 1..=11 {
            assert_eq!(reinforcements_for(&player_with_territories(n), &map), 3);
        }
    }

    #[test]
    fn grant_scales_with_floor_division() {
        let map = GameMap::new();
        assert_eq!(reinforcements_for(&player_with_territories(12), &map), 4);
        assert_eq!(reinforcements_for(&player_with_territories(14), &map), 4);
        assert_eq!(reinforcements_for(&player_with_territories(15), &map), 5);
        assert_eq!(reinforcements_for(&player_with_territories(30), &map), 10);
    }

    #[test]
    fn continent_bonus_is_added() {
        let map = map_with_continent("Europe", 5, &["A", "B"]);
        let mut p = Player::new("Alice");
        p.territories.push("A".to_string());
        p.territories.push("B".to_string());
        p.continents.push("Europe".to_string());
        // 2 territories -> base 3, plus the continent's 5.
        assert_eq!(reinforcements_for(&p, &map), 8);
    }

    #[test]
    fn unknown_continent_name_contributes_nothing() {
        let map = GameMap::new();
        let mut p = player_with_territories(3);
        p.continents.push("Atlantis".to_string());
        assert_eq!(reinforcements_for(&p, &map), 3);
    }

    #[test]
    fn assign_armies_overwrites_previous_pool() {
        let mut state = GameState::new();
        state.set_map(map_with_continent("Europe", 5, &["A", "B"]));
        let mut p = Player::new("Alice");
        p.territories.push("A".to_string());
        p.unallocated_armies = 99;
        state.players.push(p);
        state.players.push(Player::new("Bob"));

        assign_armies(&mut state).unwrap();
        assert_eq!(state.players[0].unallocated_armies, 3);
        assert_eq!(state.players[1].unallocated_armies, 0);
    }

    #[test]
    fn assign_armies_requires_map() {
        let mut state = GameState::new();
        state.players.push(Player::new("Alice"));
        assert_eq!(assign_armies(&mut state), Err(AssignError::MapNotLoaded));
    }
}
