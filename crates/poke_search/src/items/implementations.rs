//! Item hook implementations.
//!
//! Effects that happen outside the modifier chain (Life Orb recoil, Focus
//! Sash, Heavy-Duty Boots, Light Clay) are resolved by the transition
//! generator, which checks the item by name.

use crate::abilities::implementations::scale_power;
use crate::chain::MoveContext;
use crate::damage::move_effectiveness;
use crate::instruction::Instruction;
use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::state::{Pokemon, SideRef, State, Status};
use crate::types::Type;

// ============================================================================
// Attacker Items
// ============================================================================

pub fn choice_band(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

pub fn choice_specs(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Special {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

pub fn muscle_band(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        scale_power(mv, 1.1)
    } else {
        *mv
    }
}

pub fn wise_glasses(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Special {
        scale_power(mv, 1.1)
    } else {
        *mv
    }
}

/// Life Orb: 1.3x damage; the recoil is taken after the hit
pub fn life_orb(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.is_damaging() {
        scale_power(mv, 1.3)
    } else {
        *mv
    }
}

pub fn expert_belt(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.is_damaging() && move_effectiveness(mv, ctx.attacker, ctx.defender) > 1.0 {
        scale_power(mv, 1.2)
    } else {
        *mv
    }
}

/// Punching Glove: 1.1x punches, which stop making contact
pub fn punching_glove(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.flags.contains(MoveFlags::PUNCH) {
        Move {
            flags: mv.flags.difference(MoveFlags::CONTACT),
            ..scale_power(mv, 1.1)
        }
    } else {
        *mv
    }
}

pub fn wide_lens(mv: &Move, _ctx: &MoveContext) -> Move {
    Move {
        accuracy: mv.accuracy.map(|a| a * 1.1),
        ..*mv
    }
}

fn type_boost(mv: &Move, move_type: Type) -> Move {
    if mv.move_type == move_type && mv.is_damaging() {
        scale_power(mv, 1.2)
    } else {
        *mv
    }
}

macro_rules! type_boosters {
    ($($name:ident => $t:ident),* $(,)?) => {
        $(
            pub fn $name(mv: &Move, _ctx: &MoveContext) -> Move {
                type_boost(mv, Type::$t)
            }
        )*
    };
}

type_boosters! {
    silk_scarf => Normal,
    charcoal => Fire,
    mystic_water => Water,
    magnet => Electric,
    miracle_seed => Grass,
    never_melt_ice => Ice,
    black_belt => Fighting,
    poison_barb => Poison,
    soft_sand => Ground,
    sharp_beak => Flying,
    twisted_spoon => Psychic,
    silver_powder => Bug,
    hard_stone => Rock,
    spell_tag => Ghost,
    dragon_fang => Dragon,
    black_glasses => Dark,
    metal_coat => Steel,
    fairy_feather => Fairy,
}

// ============================================================================
// Defender Items
// ============================================================================

/// Assault Vest: 1.5x Special Defense
pub fn assault_vest(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Special {
        scale_power(mv, 2.0 / 3.0)
    } else {
        *mv
    }
}

/// Eviolite: 1.5x both defenses. Evolution data is not tracked, so the
/// holder is assumed to be eligible.
pub fn eviolite(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.is_damaging() {
        scale_power(mv, 2.0 / 3.0)
    } else {
        *mv
    }
}

pub fn air_balloon(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.move_type == Type::Ground && mv.is_damaging() {
        mv.without_effects()
    } else {
        *mv
    }
}

pub fn safety_goggles(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.flags.contains(MoveFlags::POWDER) {
        mv.without_effects()
    } else {
        *mv
    }
}

// ============================================================================
// Speed
// ============================================================================

pub fn choice_scarf(speed: f64, _holder: &Pokemon, _state: &State) -> f64 {
    speed * 1.5
}

pub fn iron_ball(speed: f64, _holder: &Pokemon, _state: &State) -> f64 {
    speed * 0.5
}

// ============================================================================
// End of Turn
// ============================================================================

pub fn leftovers(state: &State, side: SideRef) -> Vec<Instruction> {
    Instruction::heal_fraction(side, state.active(side), 1.0 / 16.0)
        .into_iter()
        .collect()
}

/// Black Sludge: heals Poison types, hurts everything else
pub fn black_sludge(state: &State, side: SideRef) -> Vec<Instruction> {
    let pokemon = state.active(side);
    let instruction = if pokemon.has_type(Type::Poison) {
        Instruction::heal_fraction(side, pokemon, 1.0 / 16.0)
    } else if pokemon.has_ability("magicguard") {
        None
    } else {
        Instruction::damage_fraction(side, pokemon, 1.0 / 8.0)
    };
    instruction.into_iter().collect()
}

fn orb_status(state: &State, side: SideRef, status: Status, immune: &[Type]) -> Vec<Instruction> {
    let pokemon = state.active(side);
    if !pokemon.is_alive() || !pokemon.status.is_none() || immune.iter().any(|t| pokemon.has_type(*t)) {
        return Vec::new();
    }
    vec![Instruction::ApplyStatus { side, status }]
}

pub fn flame_orb(state: &State, side: SideRef) -> Vec<Instruction> {
    orb_status(state, side, Status::Burn, &[Type::Fire])
}

pub fn toxic_orb(state: &State, side: SideRef) -> Vec<Instruction> {
    orb_status(state, side, Status::Toxic, &[Type::Poison, Type::Steel])
}
