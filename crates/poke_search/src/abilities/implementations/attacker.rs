//! Attacker abilities: run on moves the holder uses.

use super::scale_power;
use crate::chain::MoveContext;
use crate::damage::move_effectiveness;
use crate::moves::{Move, MoveCategory, MoveFlags, Secondary};
use crate::state::Weather;
use crate::types::Type;

// ============================================================================
// Flag-based Boosts
// ============================================================================

pub fn technician(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.is_damaging() && mv.base_power <= 60.0 {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

fn flag_boost(mv: &Move, flag: MoveFlags, factor: f64) -> Move {
    if mv.flags.contains(flag) {
        scale_power(mv, factor)
    } else {
        *mv
    }
}

pub fn iron_fist(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::PUNCH, 1.2)
}

pub fn strong_jaw(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::BITE, 1.5)
}

pub fn mega_launcher(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::PULSE, 1.5)
}

pub fn sharpness(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::SLICING, 1.5)
}

pub fn tough_claws(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::CONTACT, 1.3)
}

pub fn punk_rock(mv: &Move, _ctx: &MoveContext) -> Move {
    flag_boost(mv, MoveFlags::SOUND, 1.3)
}

pub fn reckless(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.recoil > 0.0 || mv.crash > 0.0 {
        scale_power(mv, 1.2)
    } else {
        *mv
    }
}

// ============================================================================
// Secondary Effects
// ============================================================================

/// Sheer Force: drops secondary effects for 1.3x
pub fn sheer_force(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.is_damaging() && mv.secondary.is_some() {
        Move {
            secondary: None,
            ..scale_power(mv, 1.3)
        }
    } else {
        *mv
    }
}

pub fn serene_grace(mv: &Move, _ctx: &MoveContext) -> Move {
    match mv.secondary {
        Some(secondary) => Move {
            secondary: Some(Secondary {
                chance: (secondary.chance * 2.0).min(100.0),
                ..secondary
            }),
            ..*mv
        },
        None => *mv,
    }
}

// ============================================================================
// Stat-equivalent Boosts
// ============================================================================

/// Adaptability: STAB becomes 2x instead of 1.5x
pub fn adaptability(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.is_damaging() && ctx.is_stab(mv) {
        scale_power(mv, 2.0 / 1.5)
    } else {
        *mv
    }
}

/// Huge Power, Pure Power: doubled Attack
pub fn huge_power(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        scale_power(mv, 2.0)
    } else {
        *mv
    }
}

pub fn hustle(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        Move {
            accuracy: mv.accuracy.map(|a| a * 0.8),
            ..scale_power(mv, 1.5)
        }
    } else {
        *mv
    }
}

pub fn gorilla_tactics(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

/// Guts: 1.5x physical power while statused; the burn penalty is skipped in damage
pub fn guts(mv: &Move, ctx: &MoveContext) -> Move {
    if mv.category == MoveCategory::Physical && !ctx.attacker.status.is_none() {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

pub fn solar_power(mv: &Move, ctx: &MoveContext) -> Move {
    match ctx.weather {
        Some(w) if w.is_sun() && mv.category == MoveCategory::Special => scale_power(mv, 1.5),
        _ => *mv,
    }
}

// ============================================================================
// Accuracy
// ============================================================================

pub fn compound_eyes(mv: &Move, _ctx: &MoveContext) -> Move {
    Move {
        accuracy: mv.accuracy.map(|a| a * 1.3),
        ..*mv
    }
}

pub fn no_guard(mv: &Move, _ctx: &MoveContext) -> Move {
    Move {
        accuracy: None,
        ..*mv
    }
}

// ============================================================================
// Type Changers
// ============================================================================

fn ate(mv: &Move, new_type: Type) -> Move {
    if mv.move_type == Type::Normal && mv.is_damaging() {
        Move {
            move_type: new_type,
            ..scale_power(mv, 1.2)
        }
    } else {
        *mv
    }
}

pub fn aerilate(mv: &Move, _ctx: &MoveContext) -> Move {
    ate(mv, Type::Flying)
}

pub fn pixilate(mv: &Move, _ctx: &MoveContext) -> Move {
    ate(mv, Type::Fairy)
}

pub fn refrigerate(mv: &Move, _ctx: &MoveContext) -> Move {
    ate(mv, Type::Ice)
}

pub fn galvanize(mv: &Move, _ctx: &MoveContext) -> Move {
    ate(mv, Type::Electric)
}

pub fn normalize(mv: &Move, _ctx: &MoveContext) -> Move {
    if mv.is_damaging() {
        Move {
            move_type: Type::Normal,
            ..scale_power(mv, 1.2)
        }
    } else {
        *mv
    }
}

// ============================================================================
// Contextual Boosts
// ============================================================================

/// Tinted Lens: resisted hits do double
pub fn tinted_lens(mv: &Move, ctx: &MoveContext) -> Move {
    let effectiveness = move_effectiveness(mv, ctx.attacker, ctx.defender);
    if mv.is_damaging() && effectiveness > 0.0 && effectiveness < 1.0 {
        scale_power(mv, 2.0)
    } else {
        *mv
    }
}

/// Analytic: 1.3x when moving last
pub fn analytic(mv: &Move, ctx: &MoveContext) -> Move {
    if !ctx.first_move {
        scale_power(mv, 1.3)
    } else {
        *mv
    }
}

pub fn sand_force(mv: &Move, ctx: &MoveContext) -> Move {
    let boosted = ctx.weather == Some(Weather::Sand)
        && matches!(mv.move_type, Type::Rock | Type::Ground | Type::Steel);
    if boosted {
        scale_power(mv, 1.3)
    } else {
        *mv
    }
}

/// Blaze, Torrent, Overgrow, Swarm: 1.5x for their type at or below 1/3 HP
fn pinch(mv: &Move, ctx: &MoveContext, move_type: Type) -> Move {
    if mv.move_type == move_type && ctx.attacker.hp * 3.0 <= ctx.attacker.max_hp {
        scale_power(mv, 1.5)
    } else {
        *mv
    }
}

pub fn blaze(mv: &Move, ctx: &MoveContext) -> Move {
    pinch(mv, ctx, Type::Fire)
}

pub fn torrent(mv: &Move, ctx: &MoveContext) -> Move {
    pinch(mv, ctx, Type::Water)
}

pub fn overgrow(mv: &Move, ctx: &MoveContext) -> Move {
    pinch(mv, ctx, Type::Grass)
}

pub fn swarm(mv: &Move, ctx: &MoveContext) -> Move {
    pinch(mv, ctx, Type::Bug)
}

fn type_boost(mv: &Move, move_type: Type, factor: f64) -> Move {
    if mv.move_type == move_type && mv.is_damaging() {
        scale_power(mv, factor)
    } else {
        *mv
    }
}

pub fn steelworker(mv: &Move, _ctx: &MoveContext) -> Move {
    type_boost(mv, Type::Steel, 1.5)
}

pub fn transistor(mv: &Move, _ctx: &MoveContext) -> Move {
    type_boost(mv, Type::Electric, 1.3)
}

pub fn dragons_maw(mv: &Move, _ctx: &MoveContext) -> Move {
    type_boost(mv, Type::Dragon, 1.5)
}

pub fn water_bubble(mv: &Move, _ctx: &MoveContext) -> Move {
    type_boost(mv, Type::Water, 2.0)
}

/// Prankster status moves fail against Dark types
pub fn prankster(mv: &Move, ctx: &MoveContext) -> Move {
    let blocked = mv.category == MoveCategory::Status
        && mv.targets_opponent()
        && mv.side_condition.is_none()
        && ctx.defender.has_type(Type::Dark);
    if blocked {
        mv.without_effects()
    } else {
        *mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::moves::lookup_move;
    use crate::state::{Side, SideRef, State};

    fn state(attacker: PokemonConfig, defender: &str) -> State {
        State::new(
            Side::new(attacker.build().unwrap(), []),
            Side::new(PokemonConfig::new(defender).build().unwrap(), []),
        )
    }

    #[test]
    fn test_technician_threshold() {
        let s = state(PokemonConfig::new("scizor").ability("technician"), "blissey");
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        assert_eq!(technician(lookup_move("bulletpunch"), &ctx).base_power, 60.0);
        assert_eq!(technician(lookup_move("xscissor"), &ctx).base_power, 80.0);
    }

    #[test]
    fn test_sheer_force_drops_secondary() {
        let s = state(PokemonConfig::new("machamp"), "blissey");
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = sheer_force(lookup_move("flareblitz"), &ctx);
        assert!(modified.secondary.is_none());
        assert!((modified.base_power - 156.0).abs() < 1e-9);
    }

    #[test]
    fn test_pixilate_changes_type() {
        let s = state(PokemonConfig::new("clefable"), "garchomp");
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = pixilate(lookup_move("hypervoice"), &ctx);
        assert_eq!(modified.move_type, Type::Fairy);
        assert!((modified.base_power - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_pinch_abilities() {
        let healthy = state(PokemonConfig::new("cinderace"), "blissey");
        let low = state(PokemonConfig::new("cinderace").current_hp(50.0), "blissey");
        let mv = lookup_move("flareblitz");
        assert_eq!(blaze(mv, &MoveContext::new(&healthy, SideRef::User, None, true)).base_power, 120.0);
        assert_eq!(blaze(mv, &MoveContext::new(&low, SideRef::User, None, true)).base_power, 180.0);
    }

    #[test]
    fn test_prankster_fails_into_dark() {
        let s = state(PokemonConfig::new("clefable"), "tyranitar");
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        assert_eq!(prankster(lookup_move("thunderwave"), &ctx).status, None);
        // Self-targeting moves still work
        let calm = lookup_move("calmmind");
        assert_eq!(prankster(calm, &ctx), *calm);
    }
}
