//! Defender abilities: run on moves aimed at the holder.
//!
//! Every hook here reads the holder as `ctx.defender`.

use super::scale_power;
use crate::chain::MoveContext;
use crate::damage::move_effectiveness;
use crate::moves::{Boosts, EffectTarget, Move, MoveCategory, MoveFlags};
use crate::state::Stat;
use crate::types::Type;

/// Whether `mv` is a directly targeted move of `move_type` (not a hazard).
fn targets_holder_with(mv: &Move, move_type: Type) -> bool {
    mv.move_type == move_type && mv.targets_opponent() && mv.side_condition.is_none()
}

/// The move is absorbed and heals the holder by a quarter.
fn absorb_heal(mv: &Move) -> Move {
    Move {
        heal: 0.25,
        heal_target: EffectTarget::Target,
        ..mv.without_effects()
    }
}

/// The move is absorbed and raises one of the holder's stats.
fn absorb_boost(mv: &Move, stat: Stat) -> Move {
    Move {
        boosts: Boosts::NONE.with(stat, 1),
        ..mv.without_effects()
    }
}

// ============================================================================
// Immunities
// ============================================================================

pub fn levitate(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.move_type == Type::Ground && mv.is_damaging() && !ctx.defender.has_item("ironball") {
        mv.without_effects()
    } else {
        *mv
    }
}

/// The fire boost itself is not tracked; only the immunity is.
pub fn flash_fire(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Fire) {
        mv.without_effects()
    } else {
        *mv
    }
}

pub fn water_absorb(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Water) {
        absorb_heal(mv)
    } else {
        *mv
    }
}

pub fn volt_absorb(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Electric) {
        absorb_heal(mv)
    } else {
        *mv
    }
}

pub fn earth_eater(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Ground) {
        absorb_heal(mv)
    } else {
        *mv
    }
}

/// Dry Skin: absorbs Water, takes 1.25x from Fire
pub fn dry_skin(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Water) {
        absorb_heal(mv)
    } else if mv.move_type == Type::Fire && mv.is_damaging() {
        scale_power(mv, 1.25)
    } else {
        *mv
    }
}

pub fn motor_drive(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Electric) {
        absorb_boost(mv, Stat::Speed)
    } else {
        *mv
    }
}

pub fn lightning_rod(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Electric) {
        absorb_boost(mv, Stat::SpecialAttack)
    } else {
        *mv
    }
}

pub fn storm_drain(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Water) {
        absorb_boost(mv, Stat::SpecialAttack)
    } else {
        *mv
    }
}

pub fn sap_sipper(mv: &Move, _ctx: &MoveContext) -> Move {
    if targets_holder_with(mv, Type::Grass) {
        absorb_boost(mv, Stat::Attack)
    } else {
        *mv
    }
}

/// Wonder Guard: only super-effective damaging moves land
pub fn wonder_guard(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.is_damaging()
        && mv.move_type != Type::Typeless
        && move_effectiveness(mv, ctx.attacker, ctx.defender) <= 1.0
    {
        mv.without_effects()
    } else {
        *mv
    }
}

pub fn bulletproof(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.flags.contains(MoveFlags::BULLET) {
        mv.without_effects()
    } else {
        *mv
    }
}

pub fn soundproof(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.flags.contains(MoveFlags::SOUND) {
        mv.without_effects()
    } else {
        *mv
    }
}

/// Good as Gold: immune to status moves from the other side
pub fn good_as_gold(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Status && mv.targets_opponent() && mv.side_condition.is_none() {
        mv.without_effects()
    } else {
        *mv
    }
}

/// Dazzling, Queenly Majesty, Armor Tail: block priority moves
pub fn dazzling(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.priority > 0 && mv.targets_opponent() {
        mv.without_effects()
    } else {
        *mv
    }
}

// ============================================================================
// Damage Reduction
// ============================================================================

pub fn thick_fat(mv: &Move, _ctx: &MoveContext) -> Move {
    if matches!(mv.move_type, Type::Fire | Type::Ice) {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

pub fn heatproof(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.move_type == Type::Fire {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

pub fn water_bubble_defense(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.move_type == Type::Fire {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

/// Fluffy: halves contact damage, doubles Fire damage
pub fn fluffy(mv: &Move, _ctx: &MoveContext) -> Move {
    let mut factor = 1.0;
    if mv.flags.contains(MoveFlags::CONTACT) {
        factor *= 0.5;
    }
    if mv.move_type == Type::Fire {
        factor *= 2.0;
    }
    scale_power(mv, factor)
}

pub fn fur_coat(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

pub fn ice_scales(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Special {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

pub fn punk_rock_defense(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.flags.contains(MoveFlags::SOUND) {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

pub fn purifying_salt(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.move_type == Type::Ghost {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

/// Multiscale, Shadow Shield: half damage at full HP
pub fn multiscale(mv: &Move, ctx: &MoveContext) -> Move {
    if ctx.defender.hp >= ctx.defender.max_hp {
        scale_power(mv, 0.5)
    } else {
        *mv
    }
}

/// Filter, Solid Rock, Prism Armor: 0.75x on super-effective hits
pub fn filter(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.is_damaging() && move_effectiveness(mv, ctx.attacker, ctx.defender) > 1.0 {
        scale_power(mv, 0.75)
    } else {
        *mv
    }
}

/// No Guard on the defender: moves aimed at it never miss
pub fn no_guard(mv: &Move, _ctx: &MoveContext) -> Move {
    Move {
        accuracy: None,
        ..*mv
    }
}
