//! Switch-in and switch-out abilities.

use crate::abilities::hooks::AbilityHooks;
use crate::instruction::{hp_fraction, Instruction};
use crate::moves::Boosts;
use crate::state::{SideRef, Stat, State, Terrain, Weather};
use crate::transitions::boosts::boost_instructions;

/// Abilities that ignore Intimidate.
const INTIMIDATE_IMMUNE: [&str; 4] = ["innerfocus", "oblivious", "owntempo", "scrappy"];

// ============================================================================
// Switch-in
// ============================================================================

pub fn intimidate(state: &State, side: SideRef) -> Vec<Instruction> {
    let target = side.opposite();
    let opponent = state.active(target);
    if !opponent.is_alive() || INTIMIDATE_IMMUNE.contains(&opponent.ability.as_str()) {
        return Vec::new();
    }
    boost_instructions(state, target, &Boosts::NONE.with(Stat::Attack, -1), true)
}

pub fn drizzle(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::Rain)
}

pub fn drought(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::Sun)
}

pub fn sand_stream(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::Sand)
}

pub fn snow_warning(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::Snow)
}

pub fn primordial_sea(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::HeavyRain)
}

pub fn desolate_land(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_weather(state, Weather::HarshSun)
}

pub fn electric_surge(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_terrain(state, Terrain::Electric)
}

pub fn grassy_surge(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_terrain(state, Terrain::Grassy)
}

pub fn psychic_surge(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_terrain(state, Terrain::Psychic)
}

pub fn misty_surge(state: &State, _side: SideRef) -> Vec<Instruction> {
    AbilityHooks::set_terrain(state, Terrain::Misty)
}

// ============================================================================
// Switch-out
// ============================================================================

/// Regenerator: heals a third of max HP on the way out
pub fn regenerator(state: &State, side: SideRef) -> Vec<Instruction> {
    let pokemon = state.active(side);
    Instruction::heal(side, pokemon, hp_fraction(pokemon, 1.0 / 3.0))
        .into_iter()
        .collect()
}

pub fn natural_cure(state: &State, side: SideRef) -> Vec<Instruction> {
    let pokemon = state.active(side);
    if pokemon.status.is_none() || !pokemon.is_alive() {
        return Vec::new();
    }
    vec![Instruction::RemoveStatus {
        side,
        status: pokemon.status,
    }]
}
