//! End-of-turn abilities.

use crate::instruction::Instruction;
use crate::moves::Boosts;
use crate::state::{SideRef, Stat, State, Weather};
use crate::transitions::boosts::boost_instructions;

pub fn speed_boost(state: &State, side: SideRef) -> Vec<Instruction> {
    boost_instructions(state, side, &Boosts::NONE.with(Stat::Speed, 1), false)
}

pub fn rain_dish(state: &State, side: SideRef) -> Vec<Instruction> {
    match state.effective_weather() {
        Some(w) if w.is_rain() => Instruction::heal_fraction(side, state.active(side), 1.0 / 16.0)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

pub fn ice_body(state: &State, side: SideRef) -> Vec<Instruction> {
    match state.effective_weather() {
        Some(Weather::Hail | Weather::Snow) => {
            Instruction::heal_fraction(side, state.active(side), 1.0 / 16.0)
                .into_iter()
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Dry Skin: heals 1/8 in rain, loses 1/8 in sun
pub fn dry_skin(state: &State, side: SideRef) -> Vec<Instruction> {
    let pokemon = state.active(side);
    let instruction = match state.effective_weather() {
        Some(w) if w.is_rain() => Instruction::heal_fraction(side, pokemon, 1.0 / 8.0),
        Some(w) if w.is_sun() => Instruction::damage_fraction(side, pokemon, 1.0 / 8.0),
        _ => None,
    };
    instruction.into_iter().collect()
}

/// Solar Power: loses 1/8 in sun
pub fn solar_power(state: &State, side: SideRef) -> Vec<Instruction> {
    match state.effective_weather() {
        Some(w) if w.is_sun() => Instruction::damage_fraction(side, state.active(side), 1.0 / 8.0)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}
