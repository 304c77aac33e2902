//! Property tests for the damage calculation.

mod common;

use common::builders::{one_on_one, with_stats};
use poke_search::chain::{modify_move, MoveContext};
use poke_search::damage::{calculate_damage, DamageConditions};
use poke_search::moves::lookup_move;
use poke_search::state::Weather;
use poke_search::{type_effectiveness, DamageRollMode, SideRef, Type};
use proptest::prelude::*;

fn max_roll(attack: u16, defense: u16, move_id: &str, weather: Option<Weather>) -> f64 {
    // Normal-type defender: neutral effectiveness for both moves used here.
    let state = one_on_one(
        with_stats("snorlax", &[move_id], [400, attack, 100, attack, 100, 100]),
        with_stats("blissey", &[], [400, 100, defense, 100, defense, 100]),
    );
    let ctx = MoveContext::new(&state, SideRef::User, None, true);
    let mv = modify_move(lookup_move(move_id), &ctx);
    let mut conditions = DamageConditions::from_state(&state, SideRef::Opponent);
    conditions.weather = weather;
    let rolls = calculate_damage(
        &state.user.active,
        &state.opponent.active,
        &mv,
        &conditions,
        DamageRollMode::All,
    )
    .expect("damaging move");
    rolls.iter().copied().fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn prop_more_attack_never_less_damage(attack in 10u16..600, extra in 0u16..400, defense in 10u16..600) {
        let low = max_roll(attack, defense, "bodyslam", None);
        let high = max_roll(attack + extra, defense, "bodyslam", None);
        prop_assert!(high >= low, "{attack}+{extra} atk: {high} < {low}");
    }

    #[test]
    fn prop_more_defense_never_more_damage(attack in 10u16..600, defense in 10u16..600, extra in 0u16..400) {
        let soft = max_roll(attack, defense, "bodyslam", None);
        let hard = max_roll(attack, defense + extra, "bodyslam", None);
        prop_assert!(hard <= soft);
    }

    #[test]
    fn prop_rain_scales_water_by_half_again(attack in 50u16..600, defense in 50u16..600) {
        let neutral = max_roll(attack, defense, "surf", None);
        let rain = max_roll(attack, defense, "surf", Some(Weather::Rain));
        let sun = max_roll(attack, defense, "surf", Some(Weather::Sun));
        // One floor per result separates these from the exact ratios
        prop_assert!((rain - neutral * 1.5).abs() <= 1.5);
        prop_assert!((sun - neutral * 0.5).abs() <= 1.0);
    }
}

#[test]
fn test_mixed_weakness_and_resistance_cancel() {
    assert_eq!(type_effectiveness(Type::Water, &[Type::Fire, Type::Water]), 1.0);
    assert_eq!(type_effectiveness(Type::Ice, &[Type::Dragon, Type::Steel]), 1.0);
    // Flying hits Ground neutrally, so only the Electric resistance applies
    assert_eq!(type_effectiveness(Type::Flying, &[Type::Ground, Type::Electric]), 0.5);
    assert_eq!(type_effectiveness(Type::Ground, &[Type::Fire, Type::Steel]), 4.0);
    assert_eq!(type_effectiveness(Type::Grass, &[Type::Fire, Type::Flying]), 0.25);
}
