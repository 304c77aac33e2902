//! Data-driven damage calculation tests.
//!
//! Uses `libtest-mimic` to generate individual tests from fixtures,
//! allowing filtering with `cargo test rain` etc.

mod common;

use common::fixtures::{load_damage_fixture, DamageTestCase, Expected, PokemonData};
use libtest_mimic::{Arguments, Failed, Trial};
use poke_search::chain::{modify_move, MoveContext};
use poke_search::damage::{calculate_damage, DamageConditions};
use poke_search::moves::lookup_move;
use poke_search::state::{SideCondition, Stat};
use poke_search::{DamageRollMode, Pokemon, PokemonConfig, Side, SideRef, State};

fn build(data: &PokemonData) -> Result<Pokemon, String> {
    let mut config = PokemonConfig::new(&data.species)
        .stats(data.stats)
        .level(data.level.unwrap_or(100));
    if let Some(ref item) = data.item {
        config = config.item(item);
    }
    if let Some(ref ability) = data.ability {
        config = config.ability(ability);
    }
    if let Some(status) = data.status {
        config = config.status(status);
    }
    let mut pokemon = config.build().map_err(|e| e.to_string())?;

    let boosts = &data.boosts;
    for (stat, stage) in [
        (Stat::Attack, boosts.attack),
        (Stat::Defense, boosts.defense),
        (Stat::SpecialAttack, boosts.special_attack),
        (Stat::SpecialDefense, boosts.special_defense),
    ] {
        pokemon.boosts[stat as usize] = stage.unwrap_or_default();
    }
    Ok(pokemon)
}

fn run_damage_test(case: &DamageTestCase) -> Result<(), String> {
    let attacker = build(&case.attacker).map_err(|e| format!("Attacker build failed: {e}"))?;
    let defender = build(&case.defender).map_err(|e| format!("Defender build failed: {e}"))?;

    let mut state = State::new(Side::new(attacker, []), Side::new(defender, []));
    state.weather = case.field.weather;
    state.terrain = case.field.terrain;
    if case.field.reflect {
        *state.opponent.side_conditions.get_mut(SideCondition::Reflect) = 5;
    }
    if case.field.light_screen {
        *state.opponent.side_conditions.get_mut(SideCondition::LightScreen) = 5;
    }

    let ctx = MoveContext::new(&state, SideRef::User, None, true);
    let mv = modify_move(lookup_move(&case.move_id), &ctx);
    let conditions = DamageConditions::from_state(&state, SideRef::Opponent);
    let result = calculate_damage(
        &state.user.active,
        &state.opponent.active,
        &mv,
        &conditions,
        DamageRollMode::All,
    );

    match (&case.expected, result) {
        (Expected::Rolls(expected), Some(rolls)) => {
            let actual: Vec<u32> = rolls.iter().map(|r| *r as u32).collect();
            if actual != *expected {
                return Err(format!(
                    "{}\n  Expected: {:?}\n  Actual:   {:?}",
                    case.description, expected, actual
                ));
            }
            Ok(())
        }
        (Expected::Marker(marker), Some(rolls)) if marker == "immune" => {
            if rolls.iter().all(|r| *r == 0.0) {
                Ok(())
            } else {
                Err(format!("{}: expected immunity, got {:?}", case.description, rolls))
            }
        }
        (Expected::Marker(marker), None) if marker == "none" => Ok(()),
        (expected, actual) => Err(format!(
            "{}: expected {:?}, got {:?}",
            case.description, expected, actual
        )),
    }
}

// ============================================================================
// Harness
// ============================================================================

fn main() {
    let args = Arguments::from_args();
    let fixture = load_damage_fixture();

    let tests: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| {
            let test_name = format!("damage::{}", sanitize_name(&case.id));
            Trial::test(test_name, move || run_damage_test(&case).map_err(Failed::from))
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

/// Sanitize test name for use as a Rust test identifier
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
