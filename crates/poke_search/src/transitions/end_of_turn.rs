//! End-of-turn residuals.
//!
//! Each phase runs for the user's side and then the opponent's before the
//! next phase starts.

use crate::abilities::ability_hooks;
use crate::config::DamageRollMode;
use crate::damage::{calculate_damage, DamageConditions};
use crate::instruction::{hp_fraction, Instruction};
use crate::items::item_hooks;
use crate::moves::lookup_move;
use crate::mutator::StateMutator;
use crate::state::{FutureSight, SideCondition, SideRef, Status, Terrain, Volatiles, Weather, Wish};
use crate::transitions::Frame;
use crate::types::Type;

const SIDES: [SideRef; 2] = [SideRef::User, SideRef::Opponent];

const SAND_IMMUNE_ABILITIES: [&str; 5] = ["sandveil", "sandrush", "sandforce", "overcoat", "magicguard"];
const HAIL_IMMUNE_ABILITIES: [&str; 4] = ["icebody", "snowcloak", "overcoat", "magicguard"];

/// Residual instructions after both sides have acted.
pub(crate) fn end_of_turn(mutator: &mut StateMutator) -> Vec<Instruction> {
    let mut frame = Frame::new(mutator);

    for side in SIDES {
        weather_damage(&mut frame, side);
    }
    for side in SIDES {
        future_sight(&mut frame, side);
    }
    for side in SIDES {
        wish(&mut frame, side);
    }
    for side in SIDES {
        grassy_terrain(&mut frame, side);
    }
    for side in SIDES {
        leech_seed(&mut frame, side);
    }
    for side in SIDES {
        status_damage(&mut frame, side);
    }
    for side in SIDES {
        held_item(&mut frame, side);
    }
    for side in SIDES {
        ability(&mut frame, side);
    }
    for side in SIDES {
        clear_turn_volatiles(&mut frame, side);
    }
    for side in SIDES {
        count_down_conditions(&mut frame, side);
    }

    frame.finish()
}

fn weather_damage(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pokemon = state.active(side);
    if !pokemon.is_alive() || pokemon.has_item("safetygoggles") {
        return;
    }
    let hurt = match state.effective_weather() {
        Some(Weather::Sand) => {
            ![Type::Rock, Type::Ground, Type::Steel].iter().any(|t| pokemon.has_type(*t))
                && !SAND_IMMUNE_ABILITIES.contains(&pokemon.ability.as_str())
        }
        Some(Weather::Hail) => {
            !pokemon.has_type(Type::Ice) && !HAIL_IMMUNE_ABILITIES.contains(&pokemon.ability.as_str())
        }
        _ => false,
    };
    if hurt {
        if let Some(damage) = Instruction::damage_fraction(side, pokemon, 1.0 / 16.0) {
            frame.push(damage);
        }
    }
}

/// Future Sight counts down on the side it will hit, and lands at zero using
/// the stats of the Pokémon that launched it.
fn future_sight(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pending = &state.side(side).future_sight;
    if pending.turns == 0 {
        return;
    }
    let previous = pending.clone();
    let remaining = pending.turns - 1;

    let mut hit = None;
    if remaining == 0 {
        let target = state.active(side);
        let source = state.side(side.opposite()).find(&pending.source);
        if let (Some(source), true) = (source, target.is_alive()) {
            let conditions = DamageConditions::from_state(state, side);
            let rolls = calculate_damage(
                source,
                target,
                lookup_move("futuresight"),
                &conditions,
                DamageRollMode::Average,
            );
            hit = rolls
                .and_then(|r| r.first().copied())
                .and_then(|amount| Instruction::damage(side, target, amount));
        }
    }

    let new = if remaining == 0 {
        FutureSight::default()
    } else {
        FutureSight {
            turns: remaining,
            source: previous.source.clone(),
        }
    };
    frame.push(Instruction::SetFutureSight { side, new, previous });
    if let Some(hit) = hit {
        frame.push(hit);
    }
}

fn wish(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let previous = state.side(side).wish;
    if previous.turns == 0 {
        return;
    }
    let remaining = previous.turns - 1;
    let heal = if remaining == 0 {
        Instruction::heal(side, state.active(side), previous.amount)
    } else {
        None
    };
    let new = if remaining == 0 {
        Wish::default()
    } else {
        Wish {
            turns: remaining,
            amount: previous.amount,
        }
    };
    frame.push(Instruction::SetWish { side, new, previous });
    frame.push_all(heal);
}

fn grassy_terrain(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pokemon = state.active(side);
    if state.terrain == Some(Terrain::Grassy) && pokemon.is_grounded() {
        let heal = Instruction::heal_fraction(side, pokemon, 1.0 / 16.0);
        frame.push_all(heal);
    }
}

fn leech_seed(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let seeded = state.active(side);
    if !seeded.is_alive() || !seeded.volatiles.contains(Volatiles::LEECH_SEED) || seeded.has_ability("magicguard") {
        return;
    }
    let drained = hp_fraction(seeded, 1.0 / 8.0).min(seeded.hp);
    let damage = Instruction::damage(side, seeded, drained);
    let heal = Instruction::heal(side.opposite(), state.active(side.opposite()), drained);
    frame.push_all(damage);
    frame.push_all(heal);
}

fn status_damage(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pokemon = state.active(side);
    if !pokemon.is_alive() {
        return;
    }
    let magic_guard = pokemon.has_ability("magicguard");
    let poison_heal = pokemon.has_ability("poisonheal");

    let mut instructions = Vec::new();
    match pokemon.status {
        Status::Burn if !magic_guard => {
            instructions.extend(Instruction::damage_fraction(side, pokemon, 1.0 / 16.0));
        }
        Status::Poison | Status::Toxic if poison_heal => {
            instructions.extend(Instruction::heal_fraction(side, pokemon, 1.0 / 8.0));
        }
        Status::Poison if !magic_guard => {
            instructions.extend(Instruction::damage_fraction(side, pokemon, 1.0 / 8.0));
        }
        Status::Toxic => {
            let count = state.side(side).side_conditions.get(SideCondition::ToxicCount);
            if !magic_guard {
                let fraction = f64::from(count + 1) / 16.0;
                instructions.extend(Instruction::damage_fraction(side, pokemon, fraction));
            }
            instructions.push(Instruction::SideStart {
                side,
                condition: SideCondition::ToxicCount,
                amount: 1,
            });
        }
        _ => {}
    }
    frame.push_all(instructions);
}

fn held_item(frame: &mut Frame, side: SideRef) {
    let pokemon = frame.state().active(side);
    if !pokemon.is_alive() {
        return;
    }
    if let Some(hook) = item_hooks(&pokemon.item).and_then(|h| h.on_end_of_turn) {
        let instructions = hook(frame.state(), side);
        frame.push_all(instructions);
    }
}

fn ability(frame: &mut Frame, side: SideRef) {
    let pokemon = frame.state().active(side);
    if !pokemon.is_alive() {
        return;
    }
    if let Some(hook) = ability_hooks(&pokemon.ability).and_then(|h| h.on_end_of_turn) {
        let instructions = hook(frame.state(), side);
        frame.push_all(instructions);
    }
}

/// Protect and flinch last one turn. The protect counter survives a turn in
/// which Protect succeeded and resets otherwise.
fn clear_turn_volatiles(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pokemon = state.active(side);
    let mut instructions = Vec::new();
    if pokemon.volatiles.contains(Volatiles::PROTECT) {
        instructions.push(Instruction::RemoveVolatileStatus {
            side,
            volatile: Volatiles::PROTECT,
        });
    } else {
        let counter = state.side(side).side_conditions.get(SideCondition::Protect);
        if counter > 0 {
            instructions.push(Instruction::SideEnd {
                side,
                condition: SideCondition::Protect,
                amount: counter,
            });
        }
    }
    if pokemon.volatiles.contains(Volatiles::FLINCH) {
        instructions.push(Instruction::RemoveVolatileStatus {
            side,
            volatile: Volatiles::FLINCH,
        });
    }
    frame.push_all(instructions);
}

fn count_down_conditions(frame: &mut Frame, side: SideRef) {
    let conditions = frame.state().side(side).side_conditions;
    for condition in SideCondition::TIMED {
        if conditions.get(condition) > 0 {
            frame.push(Instruction::SideEnd {
                side,
                condition,
                amount: 1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::state::{Side, State};

    fn state(user: PokemonConfig, opponent: PokemonConfig) -> State {
        State::new(
            Side::new(user.build().unwrap(), []),
            Side::new(opponent.build().unwrap(), []),
        )
    }

    fn run(s: &mut State) -> Vec<Instruction> {
        let before = s.clone();
        let mut mutator = StateMutator::new(s);
        let instructions = end_of_turn(&mut mutator);
        assert_eq!(*mutator.state, before);
        instructions
    }

    #[test]
    fn test_sand_spares_rock_types() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("blissey"));
        s.weather = Some(Weather::Sand);
        let instructions = run(&mut s);
        assert!(!instructions.iter().any(|i| matches!(i, Instruction::Damage { side: SideRef::User, .. })));
        // 651 / 16
        assert!(instructions.contains(&Instruction::Damage { side: SideRef::Opponent, amount: 40.0 }));
    }

    #[test]
    fn test_toxic_damage_grows() {
        let mut s = state(PokemonConfig::new("garchomp").status(Status::Toxic), PokemonConfig::new("blissey"));
        *s.user.side_conditions.get_mut(SideCondition::ToxicCount) = 2;
        let instructions = run(&mut s);
        // 3/16 of 357
        assert!(instructions.contains(&Instruction::Damage { side: SideRef::User, amount: 66.0 }));
        assert!(instructions.contains(&Instruction::SideStart {
            side: SideRef::User,
            condition: SideCondition::ToxicCount,
            amount: 1,
        }));
    }

    #[test]
    fn test_wish_lands_after_countdown() {
        let mut s = state(PokemonConfig::new("blissey").current_hp(100.0), PokemonConfig::new("garchomp"));
        s.user.wish = Wish { turns: 1, amount: 200.0 };
        let instructions = run(&mut s);
        assert!(instructions.contains(&Instruction::Heal { side: SideRef::User, amount: 200.0 }));
    }

    #[test]
    fn test_screens_count_down_and_protect_clears() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("blissey"));
        *s.user.side_conditions.get_mut(SideCondition::Reflect) = 3;
        *s.user.side_conditions.get_mut(SideCondition::Protect) = 1;
        s.user.active.volatiles.insert(Volatiles::PROTECT);
        let instructions = run(&mut s);
        assert!(instructions.contains(&Instruction::SideEnd {
            side: SideRef::User,
            condition: SideCondition::Reflect,
            amount: 1,
        }));
        assert!(instructions.contains(&Instruction::RemoveVolatileStatus {
            side: SideRef::User,
            volatile: Volatiles::PROTECT,
        }));
        assert!(!instructions.iter().any(|i| matches!(
            i,
            Instruction::SideEnd { condition: SideCondition::Protect, .. }
        )));
    }

    #[test]
    fn test_leech_seed_drains_to_opponent() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("ferrothorn").current_hp(100.0));
        s.user.active.volatiles.insert(Volatiles::LEECH_SEED);
        let instructions = run(&mut s);
        assert!(instructions.contains(&Instruction::Damage { side: SideRef::User, amount: 44.0 }));
        assert!(instructions.contains(&Instruction::Heal { side: SideRef::Opponent, amount: 44.0 }));
    }
}
