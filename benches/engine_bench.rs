use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use hegemon::assign::{assign_territories, derive_continent_ownership};
use hegemon::reinforce::reinforcements_for;
use hegemon::roster::update_players;
use hegemon::{Continent, GameMap, GameState, Territory};

/// Builds a synthetic catalog: `continents` continents of `per_continent`
/// territories each.
fn synthetic_map(continents: usize, per_continent: usize) -> GameMap {
    let mut map = GameMap::new();
    for c in 0..continents {
        let continent_name = format!("C{}", c);
        let mut continent = Continent::new(&continent_name, 5);
        for t in 0..per_continent {
            let territory_name = format!("C{}T{}", c, t);
            continent.add_territory(&territory_name);
            map.territories
                .push(Territory::new(&territory_name, &continent_name));
        }
        map.continents.push(continent);
    }
    map
}

fn game_with_players(map: GameMap, players: usize) -> GameState {
    let mut state = GameState::new();
    state.set_map(map);
    for i in 0..players {
        update_players(&mut state, "add", &format!("player{}", i)).unwrap();
    }
    state
}

fn bench_assign_territories(c: &mut Criterion) {
    // 10 continents x 50 territories, 6 players.
    let state = game_with_players(synthetic_map(10, 50), 6);
    c.bench_function("assign_500_territories_6_players", |b| {
        b.iter(|| {
            let mut fresh = state.clone();
            let mut rng = SmallRng::seed_from_u64(42);
            assign_territories(black_box(&mut fresh), &mut rng).unwrap();
            fresh
        })
    });
}

fn bench_derive_continent_ownership(c: &mut Criterion) {
    let mut state = game_with_players(synthetic_map(10, 50), 6);
    let mut rng = SmallRng::seed_from_u64(42);
    assign_territories(&mut state, &mut rng).unwrap();
    let continents = state.map.as_ref().unwrap().continents.clone();

    c.bench_function("derive_ownership_500_territories", |b| {
        b.iter(|| {
            derive_continent_ownership(black_box(&mut state.players), black_box(&continents))
        })
    });
}

fn bench_reinforcements(c: &mut Criterion) {
    let mut state = game_with_players(synthetic_map(10, 50), 6);
    let mut rng = SmallRng::seed_from_u64(42);
    assign_territories(&mut state, &mut rng).unwrap();
    let map = state.map.clone().unwrap();

    c.bench_function("reinforcements_for_6_players", |b| {
        b.iter(|| {
            state
                .players
                .iter()
                .map(|p| reinforcements_for(black_box(p), black_box(&map)))
                .sum::<u32>()
        })
    });
}

criterion_group!(
    benches,
    bench_assign_territories,
    bench_derive_continent_ownership,
    bench_reinforcements
);
criterion_main!(benches);
