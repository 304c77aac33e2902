//! Move hook implementations.

use crate::chain::MoveContext;
use crate::moves::Move;
use crate::state::{Stat, Status, Weather};
use crate::types::Type;

// ============================================================================
// Conditional Base Power
// ============================================================================

/// Knock Off: 1.5x if target holds an item
pub fn knockoff_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    !ctx.defender.item.is_empty()
}

/// Venoshock: 2x if target is poisoned
pub fn venoshock_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    matches!(ctx.defender.status, Status::Poison | Status::Toxic)
}

/// Hex: 2x if target has any major status condition
pub fn hex_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    !ctx.defender.status.is_none()
}

/// Facade: 2x if the user is burned, paralyzed or poisoned
pub fn facade_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    matches!(
        ctx.attacker.status,
        Status::Burn | Status::Paralysis | Status::Poison | Status::Toxic
    )
}

/// Bolt Beak, Fishious Rend: 2x when moving first
pub fn moves_first_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    ctx.first_move
}

/// Acrobatics: 2x without a held item
pub fn acrobatics_condition(_move_data: &Move, ctx: &MoveContext) -> bool {
    ctx.attacker.item.is_empty()
}

// ============================================================================
// Weather
// ============================================================================

pub fn weather_ball(move_data: &Move, ctx: &MoveContext) -> Move {
    let move_type = match ctx.weather {
        Some(Weather::Sun | Weather::HarshSun) => Type::Fire,
        Some(Weather::Rain | Weather::HeavyRain) => Type::Water,
        Some(Weather::Sand) => Type::Rock,
        Some(Weather::Hail | Weather::Snow) => Type::Ice,
        None => return *move_data,
    };
    Move {
        move_type,
        base_power: move_data.base_power * 2.0,
        ..*move_data
    }
}

/// Solar Beam: half power outside of sun. The charge turn is not modeled.
pub fn solar_beam(move_data: &Move, ctx: &MoveContext) -> Move {
    match ctx.weather {
        Some(w) if !w.is_sun() => Move {
            base_power: move_data.base_power / 2.0,
            ..*move_data
        },
        _ => *move_data,
    }
}

/// Thunder, Hurricane: perfect accuracy in rain, 50% in sun
pub fn rain_accuracy(move_data: &Move, ctx: &MoveContext) -> Move {
    match ctx.weather {
        Some(w) if w.is_rain() => Move {
            accuracy: None,
            ..*move_data
        },
        Some(w) if w.is_sun() => Move {
            accuracy: Some(50.0),
            ..*move_data
        },
        _ => *move_data,
    }
}

/// Blizzard: perfect accuracy in hail or snow
pub fn blizzard(move_data: &Move, ctx: &MoveContext) -> Move {
    match ctx.weather {
        Some(Weather::Hail | Weather::Snow) => Move {
            accuracy: None,
            ..*move_data
        },
        _ => *move_data,
    }
}

/// Synthesis, Moonlight, Morning Sun: 2/3 in sun, 1/4 in other weather
pub fn weather_heal(move_data: &Move, ctx: &MoveContext) -> Move {
    let heal = match ctx.weather {
        None => move_data.heal,
        Some(w) if w.is_sun() => 2.0 / 3.0,
        Some(_) => 0.25,
    };
    Move { heal, ..*move_data }
}

pub fn aurora_veil(move_data: &Move, ctx: &MoveContext) -> Move {
    match ctx.weather {
        Some(Weather::Hail | Weather::Snow) => *move_data,
        _ => move_data.without_effects(),
    }
}

// ============================================================================
// Variable Power
// ============================================================================

/// Eruption, Water Spout: power scales with the user's remaining HP
pub fn hp_scaled_power(move_data: &Move, ctx: &MoveContext) -> Move {
    let base_power = (move_data.base_power * ctx.attacker.hp_fraction()).floor().max(1.0);
    Move {
        base_power,
        ..*move_data
    }
}

/// Grass Knot, Low Kick
pub fn target_weight_power(move_data: &Move, ctx: &MoveContext) -> Move {
    let weight = ctx.defender.weight_kg;
    let base_power = if weight < 10.0 {
        20.0
    } else if weight < 25.0 {
        40.0
    } else if weight < 50.0 {
        60.0
    } else if weight < 100.0 {
        80.0
    } else if weight < 200.0 {
        100.0
    } else {
        120.0
    };
    Move {
        base_power,
        ..*move_data
    }
}

/// Heavy Slam: power from the user/target weight ratio
pub fn weight_ratio_power(move_data: &Move, ctx: &MoveContext) -> Move {
    let ratio = if ctx.defender.weight_kg > 0.0 {
        ctx.attacker.weight_kg / ctx.defender.weight_kg
    } else {
        f64::INFINITY
    };
    let base_power = if ratio >= 5.0 {
        120.0
    } else if ratio >= 4.0 {
        100.0
    } else if ratio >= 3.0 {
        80.0
    } else if ratio >= 2.0 {
        60.0
    } else {
        40.0
    };
    Move {
        base_power,
        ..*move_data
    }
}

/// Gyro Ball: faster targets take more damage, capped at 150
pub fn gyro_ball(move_data: &Move, ctx: &MoveContext) -> Move {
    let user_speed = ctx.attacker.boosted_stat(Stat::Speed).max(1.0);
    let target_speed = ctx.defender.boosted_stat(Stat::Speed);
    let base_power = ((25.0 * target_speed / user_speed).floor() + 1.0).min(150.0);
    Move {
        base_power,
        ..*move_data
    }
}

/// Electro Ball: power from the user/target speed ratio
pub fn electro_ball(move_data: &Move, ctx: &MoveContext) -> Move {
    let target_speed = ctx.defender.boosted_stat(Stat::Speed).max(1.0);
    let ratio = ctx.attacker.boosted_stat(Stat::Speed) / target_speed;
    let base_power = if ratio >= 4.0 {
        150.0
    } else if ratio >= 3.0 {
        120.0
    } else if ratio >= 2.0 {
        80.0
    } else if ratio >= 1.0 {
        60.0
    } else {
        40.0
    };
    Move {
        base_power,
        ..*move_data
    }
}

/// Stored Power: +20 per positive boost stage
pub fn stored_power(move_data: &Move, ctx: &MoveContext) -> Move {
    let stages: i32 = ctx.attacker.boosts.iter().filter(|b| **b > 0).map(|b| *b as i32).sum();
    Move {
        base_power: move_data.base_power + 20.0 * stages as f64,
        ..*move_data
    }
}

// ============================================================================
// Contextual Failure
// ============================================================================

/// Sucker Punch fails unless the target is about to use a damaging move.
pub fn sucker_punch(move_data: &Move, ctx: &MoveContext) -> Move {
    match ctx.defending_move {
        Some(defending) if ctx.first_move && defending.is_damaging() => *move_data,
        _ => move_data.without_effects(),
    }
}

/// Fake Out, First Impression: only on the first turn after switching in.
pub fn first_turn_only(move_data: &Move, ctx: &MoveContext) -> Move {
    let last = &ctx.attacker_side.last_used_move;
    if last.move_id.is_empty() || last.switched_in() {
        *move_data
    } else {
        move_data.without_effects()
    }
}

/// Poltergeist fails against a target without an item.
pub fn poltergeist(move_data: &Move, ctx: &MoveContext) -> Move {
    if ctx.defender.item.is_empty() {
        move_data.without_effects()
    } else {
        *move_data
    }
}

/// Belly Drum fails at or below half HP.
pub fn belly_drum(move_data: &Move, ctx: &MoveContext) -> Move {
    if ctx.attacker.hp * 2.0 <= ctx.attacker.max_hp {
        move_data.without_effects()
    } else {
        *move_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::MoveContext;
    use crate::entities::PokemonConfig;
    use crate::moves::lookup_move;
    use crate::state::{Side, SideRef, State};

    fn state_with(user: &str, opponent: &str) -> State {
        State::new(
            Side::new(PokemonConfig::new(user).build().unwrap(), []),
            Side::new(PokemonConfig::new(opponent).build().unwrap(), []),
        )
    }

    #[test]
    fn test_weather_ball_in_rain() {
        let mut state = state_with("pelipper", "heatran");
        state.weather = Some(Weather::Rain);
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        let mv = weather_ball(lookup_move("weatherball"), &ctx);
        assert_eq!(mv.move_type, Type::Water);
        assert_eq!(mv.base_power, 100.0);
    }

    #[test]
    fn test_sucker_punch_fails_into_status_move() {
        let state = state_with("kingambit", "clefable");
        let calm_mind = lookup_move("calmmind");
        let ctx = MoveContext::new(&state, SideRef::User, Some(calm_mind), true);
        assert!(!sucker_punch(lookup_move("suckerpunch"), &ctx).has_effect());

        let moonblast = lookup_move("moonblast");
        let ctx = MoveContext::new(&state, SideRef::User, Some(moonblast), true);
        assert!(sucker_punch(lookup_move("suckerpunch"), &ctx).has_effect());

        let ctx = MoveContext::new(&state, SideRef::User, Some(moonblast), false);
        assert!(!sucker_punch(lookup_move("suckerpunch"), &ctx).has_effect());
    }

    #[test]
    fn test_fake_out_only_after_switch() {
        let mut state = state_with("weavile", "blissey");
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert!(first_turn_only(lookup_move("fakeout"), &ctx).has_effect());

        state.user.last_used_move.move_id = "iceshard".to_string();
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert!(!first_turn_only(lookup_move("fakeout"), &ctx).has_effect());

        state.user.last_used_move.move_id = "switch weavile".to_string();
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert!(first_turn_only(lookup_move("fakeout"), &ctx).has_effect());
    }

    #[test]
    fn test_weight_based_power() {
        let state = state_with("rillaboom", "snorlax");
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert_eq!(target_weight_power(lookup_move("grassknot"), &ctx).base_power, 120.0);

        let state = state_with("heatran", "gengar");
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert_eq!(weight_ratio_power(lookup_move("heavyslam"), &ctx).base_power, 120.0);
    }

    #[test]
    fn test_eruption_scales_with_hp() {
        let mut state = state_with("heatran", "blissey");
        state.user.active.hp = state.user.active.max_hp / 2.0;
        let ctx = MoveContext::new(&state, SideRef::User, None, true);
        assert_eq!(hp_scaled_power(lookup_move("eruption"), &ctx).base_power, 75.0);
    }
}
