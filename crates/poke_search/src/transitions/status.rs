//! Whether a status or volatile condition can land.

use crate::state::{SideCondition, SideRef, State, Status, Terrain, Volatiles};
use crate::types::Type;

const BURN_IMMUNE: [&str; 3] = ["waterveil", "waterbubble", "thermalexchange"];
const SLEEP_IMMUNE: [&str; 3] = ["insomnia", "vitalspirit", "sweetveil"];
const POISON_IMMUNE: [&str; 2] = ["immunity", "pastelveil"];
const ANY_STATUS_IMMUNE: [&str; 2] = ["comatose", "purifyingsalt"];

/// Whether `status` can be inflicted on the active Pokémon of `side`.
///
/// `from_opponent` enables the checks that only guard against the other
/// side: Safeguard and Misty Terrain.
pub fn can_apply_status(state: &State, side: SideRef, status: Status, from_opponent: bool) -> bool {
    let pokemon = state.active(side);
    if status.is_none() || !pokemon.is_alive() || !pokemon.status.is_none() {
        return false;
    }
    if ANY_STATUS_IMMUNE.contains(&pokemon.ability.as_str()) {
        return false;
    }
    let weather = state.effective_weather();
    if pokemon.has_ability("leafguard") && weather.is_some_and(|w| w.is_sun()) {
        return false;
    }

    let immune = match status {
        Status::Burn => pokemon.has_type(Type::Fire) || BURN_IMMUNE.contains(&pokemon.ability.as_str()),
        Status::Paralysis => pokemon.has_type(Type::Electric) || pokemon.has_ability("limber"),
        Status::Poison | Status::Toxic => {
            pokemon.has_type(Type::Poison)
                || pokemon.has_type(Type::Steel)
                || POISON_IMMUNE.contains(&pokemon.ability.as_str())
        }
        Status::Freeze => {
            pokemon.has_type(Type::Ice)
                || pokemon.has_ability("magmaarmor")
                || weather.is_some_and(|w| w.is_sun())
        }
        Status::Sleep => SLEEP_IMMUNE.contains(&pokemon.ability.as_str()),
        Status::None => true,
    };
    if immune {
        return false;
    }

    if pokemon.is_grounded() {
        match state.terrain {
            Some(Terrain::Misty) if from_opponent => return false,
            Some(Terrain::Electric) if status == Status::Sleep => return false,
            _ => {}
        }
    }
    if from_opponent && state.side(side).side_conditions.has(SideCondition::Safeguard) {
        return false;
    }
    true
}

/// Whether `volatile` can be added to the active Pokémon of `side`.
pub fn can_apply_volatile(state: &State, side: SideRef, volatile: Volatiles) -> bool {
    let pokemon = state.active(side);
    if !pokemon.is_alive() || pokemon.volatiles.contains(volatile) {
        return false;
    }
    if volatile == Volatiles::CONFUSION {
        let misty = state.terrain == Some(Terrain::Misty) && pokemon.is_grounded();
        return !(pokemon.has_ability("owntempo") || misty);
    }
    if volatile == Volatiles::LEECH_SEED {
        return !pokemon.has_type(Type::Grass);
    }
    if volatile == Volatiles::TAUNT {
        return !(pokemon.has_ability("oblivious") || pokemon.has_ability("aromaveil"));
    }
    if volatile == Volatiles::FLINCH {
        return !pokemon.has_ability("innerfocus");
    }
    true
}
