//! Damage calculation.
//!
//! The calculation follows the standard formula:
//! 1. **Base Damage**: `floor(floor(2 * Level / 5 + 2) * Power * Atk / Def / 50) + 2`
//! 2. **Roll**: one or more multipliers between 0.85 and 1.0, per `DamageRollMode`
//! 3. **Modifier**: product of type effectiveness, weather, STAB, burn,
//!    screens, terrain and critical hit, floored once at the end
//!
//! Power-changing effects (abilities, items, conditional moves) are applied
//! earlier by the modifier chain; this module only sees the final move.
//!
//! # Usage
//!
//! ```ignore
//! use poke_search::damage::{calculate_damage, DamageConditions};
//!
//! let conditions = DamageConditions::from_state(&state, SideRef::Opponent);
//! let rolls = calculate_damage(attacker, defender, &mv, &conditions, DamageRollMode::Average);
//! ```

pub mod effectiveness;
pub mod fixed;
pub mod formula;

pub use effectiveness::move_effectiveness;
pub use fixed::get_fixed_damage;
pub use formula::{apply_boost, apply_roll, get_base_damage, hit_chance};

use crate::config::DamageRollMode;
use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::state::{Pokemon, SideCondition, SideRef, Stat, StatIndex, State, Status, Terrain, Weather};
use crate::types::Type;

/// Field conditions that affect damage, read from the defender's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageConditions {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
}

impl DamageConditions {
    pub fn from_state(state: &State, defender: SideRef) -> Self {
        let conditions = &state.side(defender).side_conditions;
        Self {
            weather: state.effective_weather(),
            terrain: state.terrain,
            reflect: conditions.has(SideCondition::Reflect),
            light_screen: conditions.has(SideCondition::LightScreen),
            aurora_veil: conditions.has(SideCondition::AuroraVeil),
        }
    }
}

/// Damage values, one per roll the mode asks for.
///
/// Returns `None` for moves that deal no damage at all (status moves), and
/// `Some(vec![0.0])` when the defender is immune.
pub fn calculate_damage(
    attacker: &Pokemon,
    defender: &Pokemon,
    mv: &Move,
    conditions: &DamageConditions,
    mode: DamageRollMode,
) -> Option<Vec<f64>> {
    if let Some(fixed) = get_fixed_damage(mv, attacker, defender) {
        return Some(vec![fixed]);
    }
    if !mv.is_damaging() || mv.base_power <= 0.0 {
        return None;
    }

    let effectiveness = move_effectiveness(mv, attacker, defender);
    if effectiveness == 0.0 {
        return Some(vec![0.0]);
    }

    let critical = mv.flags.contains(MoveFlags::WILL_CRIT);
    let (attack, defense) = attack_and_defense(attacker, defender, mv, conditions, critical);
    let base = get_base_damage(attacker.level, mv.base_power, attack, defense);

    let modifier = effectiveness
        * weather_modifier(mv, conditions.weather)
        * stab_modifier(mv, attacker)
        * burn_modifier(mv, attacker)
        * screen_modifier(mv, attacker, conditions, critical)
        * terrain_modifier(mv, attacker, defender, conditions.terrain)
        * if critical { 1.5 } else { 1.0 };

    if modifier == 0.0 {
        return Some(vec![0.0]);
    }

    Some(
        mode.rolls()
            .iter()
            .map(|roll| (apply_roll(base, *roll) * modifier).floor().max(1.0))
            .collect(),
    )
}

// ============================================================================
// Stats
// ============================================================================

fn attack_and_defense(
    attacker: &Pokemon,
    defender: &Pokemon,
    mv: &Move,
    conditions: &DamageConditions,
    critical: bool,
) -> (f64, f64) {
    let physical = mv.category == MoveCategory::Physical;

    let (attack_source, attack_stat) = if mv.flags.contains(MoveFlags::USES_TARGET_ATTACK) {
        (defender, Stat::Attack)
    } else if mv.flags.contains(MoveFlags::USES_DEFENSE_AS_ATTACK) {
        (attacker, Stat::Defense)
    } else if physical {
        (attacker, Stat::Attack)
    } else {
        (attacker, Stat::SpecialAttack)
    };

    let defense_stat = if physical || mv.flags.contains(MoveFlags::TARGETS_PHYSICAL_DEFENSE) {
        Stat::Defense
    } else {
        Stat::SpecialDefense
    };

    let mut attack_stage = attack_source.boost(attack_stat);
    let mut defense_stage = defender.boost(defense_stat);
    if defender.has_ability("unaware") {
        attack_stage = 0;
    }
    if attacker.has_ability("unaware") {
        defense_stage = 0;
    }
    // Critical hits ignore the attacker's drops and the defender's raises.
    if critical {
        attack_stage = attack_stage.max(0);
        defense_stage = defense_stage.min(0);
    }

    let attack = apply_boost(raw_stat(attack_source, attack_stat), attack_stage) as f64;
    let mut defense = apply_boost(raw_stat(defender, defense_stat), defense_stage) as f64;

    match (conditions.weather, defense_stat) {
        (Some(Weather::Sand), Stat::SpecialDefense) if defender.has_type(Type::Rock) => {
            defense = (defense * 1.5).floor();
        }
        (Some(Weather::Snow), Stat::Defense) if defender.has_type(Type::Ice) => {
            defense = (defense * 1.5).floor();
        }
        _ => {}
    }

    (attack, defense)
}

fn raw_stat(pokemon: &Pokemon, stat: Stat) -> u16 {
    pokemon.stat(stat.stat_index().unwrap_or(StatIndex::Attack))
}

// ============================================================================
// Modifiers
// ============================================================================

fn weather_modifier(mv: &Move, weather: Option<Weather>) -> f64 {
    match (weather, mv.move_type) {
        (Some(Weather::Sun), Type::Fire) | (Some(Weather::HarshSun), Type::Fire) => 1.5,
        (Some(Weather::Sun), Type::Water) => 0.5,
        (Some(Weather::HarshSun), Type::Water) => 0.0,
        (Some(Weather::Rain), Type::Water) | (Some(Weather::HeavyRain), Type::Water) => 1.5,
        (Some(Weather::Rain), Type::Fire) => 0.5,
        (Some(Weather::HeavyRain), Type::Fire) => 0.0,
        _ => 1.0,
    }
}

fn stab_modifier(mv: &Move, attacker: &Pokemon) -> f64 {
    if mv.move_type != Type::Typeless && attacker.has_type(mv.move_type) {
        1.5
    } else {
        1.0
    }
}

fn burn_modifier(mv: &Move, attacker: &Pokemon) -> f64 {
    let halved = mv.category == MoveCategory::Physical
        && attacker.status == Status::Burn
        && !attacker.has_ability("guts")
        && mv.id != "facade";
    if halved {
        0.5
    } else {
        1.0
    }
}

fn screen_modifier(mv: &Move, attacker: &Pokemon, conditions: &DamageConditions, critical: bool) -> f64 {
    if critical || attacker.has_ability("infiltrator") {
        return 1.0;
    }
    let screened = conditions.aurora_veil
        || (mv.category == MoveCategory::Physical && conditions.reflect)
        || (mv.category == MoveCategory::Special && conditions.light_screen);
    if screened {
        0.5
    } else {
        1.0
    }
}

fn terrain_modifier(mv: &Move, attacker: &Pokemon, defender: &Pokemon, terrain: Option<Terrain>) -> f64 {
    match (terrain, mv.move_type) {
        (Some(Terrain::Electric), Type::Electric)
        | (Some(Terrain::Grassy), Type::Grass)
        | (Some(Terrain::Psychic), Type::Psychic)
            if attacker.is_grounded() =>
        {
            1.3
        }
        (Some(Terrain::Misty), Type::Dragon) if defender.is_grounded() => 0.5,
        _ => 1.0,
    }
}
