//! Battle state builders.

use poke_search::{Pokemon, PokemonConfig, Side, State};

/// Level 100 Pokémon with default spread and the given moves.
pub fn pokemon(species: &str, moves: &[&str]) -> Pokemon {
    PokemonConfig::new(species)
        .moves(moves)
        .build()
        .unwrap_or_else(|e| panic!("building {species}: {e}"))
}

/// Pokémon with explicit final stats `[HP, Atk, Def, SpA, SpD, Spe]`.
pub fn with_stats(species: &str, moves: &[&str], stats: [u16; 6]) -> Pokemon {
    PokemonConfig::new(species)
        .moves(moves)
        .stats(stats)
        .build()
        .unwrap_or_else(|e| panic!("building {species}: {e}"))
}

/// One Pokémon per side, no reserves.
pub fn one_on_one(user: Pokemon, opponent: Pokemon) -> State {
    State::new(Side::new(user, []), Side::new(opponent, []))
}

/// State with reserves on both sides.
pub fn teams(user: Vec<Pokemon>, opponent: Vec<Pokemon>) -> State {
    State::new(side(user), side(opponent))
}

fn side(mut team: Vec<Pokemon>) -> Side {
    assert!(!team.is_empty(), "a side needs an active Pokémon");
    let active = team.remove(0);
    Side::new(active, team)
}

/// Sum of branch probabilities.
pub fn total_probability(branches: &[poke_search::StateInstructions]) -> f64 {
    branches.iter().map(|b| b.percentage).sum()
}
