use super::*;
use crate::entities::PokemonConfig;
use crate::instruction::Instruction;
use crate::moves::lookup_move;
use crate::state::{Side, SideRef, Stat, State, Status, Weather};

fn state(user: PokemonConfig, opponent: PokemonConfig) -> State {
    State::new(
        Side::new(user.build().unwrap(), []),
        Side::new(opponent.build().unwrap(), []),
    )
}

#[test]
fn test_registry_lookup() {
    let drizzle = ability_hooks("drizzle").expect("drizzle is registered");
    assert!(drizzle.on_switch_in.is_some());
    assert!(drizzle.on_modify_attack_being_used.is_none());

    assert!(ability_hooks("").is_none());
    assert!(ability_hooks("notarealability").is_none());
}

#[test]
fn test_drizzle_hook() {
    let s = state(PokemonConfig::new("pelipper"), PokemonConfig::new("garchomp"));
    let hook = ability_hooks("drizzle").and_then(|h| h.on_switch_in).unwrap();
    assert_eq!(
        hook(&s, SideRef::User),
        vec![Instruction::ChangeWeather { new: Some(Weather::Rain), previous: None }]
    );
}

#[test]
fn test_weather_setter_respects_primal_weather() {
    let mut s = state(PokemonConfig::new("pelipper"), PokemonConfig::new("garchomp"));
    s.weather = Some(Weather::HarshSun);
    let hook = ability_hooks("drizzle").and_then(|h| h.on_switch_in).unwrap();
    assert!(hook(&s, SideRef::User).is_empty());

    s.weather = Some(Weather::Rain);
    assert!(hook(&s, SideRef::User).is_empty());
}

#[test]
fn test_prankster_hook() {
    let s = state(PokemonConfig::new("clefable"), PokemonConfig::new("garchomp"));
    let hook = ability_hooks("prankster").and_then(|h| h.on_modify_priority).unwrap();
    assert_eq!(hook(lookup_move("thunderwave"), s.active(SideRef::User)), 1);
    assert_eq!(hook(lookup_move("moonblast"), s.active(SideRef::User)), 0);
}

#[test]
fn test_intimidate_lowers_opponent_attack() {
    let s = state(PokemonConfig::new("gyarados"), PokemonConfig::new("garchomp"));
    let hook = ability_hooks("intimidate").and_then(|h| h.on_switch_in).unwrap();
    assert_eq!(
        hook(&s, SideRef::User),
        vec![Instruction::Boost { side: SideRef::Opponent, stat: Stat::Attack, amount: -1 }]
    );

    let blocked = state(PokemonConfig::new("gyarados"), PokemonConfig::new("snorlax").ability("owntempo"));
    assert!(hook(&blocked, SideRef::User).is_empty());
}

#[test]
fn test_regenerator_heals_a_third() {
    // Toxapex: 50 base HP -> 241 max HP
    let s = state(
        PokemonConfig::new("toxapex").ability("regenerator").current_hp(100.0),
        PokemonConfig::new("garchomp"),
    );
    let hook = ability_hooks("regenerator").and_then(|h| h.on_switch_out).unwrap();
    assert_eq!(
        hook(&s, SideRef::User),
        vec![Instruction::Heal { side: SideRef::User, amount: 80.0 }]
    );
}

#[test]
fn test_natural_cure_clears_status() {
    let s = state(
        PokemonConfig::new("blissey").ability("naturalcure").status(Status::Toxic),
        PokemonConfig::new("garchomp"),
    );
    let hook = ability_hooks("naturalcure").and_then(|h| h.on_switch_out).unwrap();
    assert_eq!(
        hook(&s, SideRef::User),
        vec![Instruction::RemoveStatus { side: SideRef::User, status: Status::Toxic }]
    );
}

#[test]
fn test_swift_swim_doubles_in_rain() {
    let mut s = state(PokemonConfig::new("magikarp"), PokemonConfig::new("garchomp"));
    let hook = ability_hooks("swiftswim").and_then(|h| h.on_modify_speed).unwrap();
    assert_eq!(hook(100.0, s.active(SideRef::User), &s), 100.0);
    s.weather = Some(Weather::Rain);
    assert_eq!(hook(100.0, s.active(SideRef::User), &s), 200.0);
}

#[test]
fn test_dry_skin_end_of_turn() {
    let mut s = state(
        PokemonConfig::new("toxapex").ability("dryskin").current_hp(100.0),
        PokemonConfig::new("garchomp"),
    );
    let hook = ability_hooks("dryskin").and_then(|h| h.on_end_of_turn).unwrap();
    assert!(hook(&s, SideRef::User).is_empty());

    s.weather = Some(Weather::Rain);
    // 241 / 8 = 30.1
    assert_eq!(hook(&s, SideRef::User), vec![Instruction::Heal { side: SideRef::User, amount: 30.0 }]);

    s.weather = Some(Weather::Sun);
    assert_eq!(hook(&s, SideRef::User), vec![Instruction::Damage { side: SideRef::User, amount: 30.0 }]);
}
