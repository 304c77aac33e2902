//! Switching: leaving the field, entry hazards, and entry abilities.

use crate::abilities::ability_hooks;
use crate::instruction::Instruction;
use crate::moves::Boosts;
use crate::species::lookup_species;
use crate::state::{LastUsedMove, Pokemon, SideCondition, SideRef, Stat, State, Status};
use crate::transitions::boosts::boost_instructions;
use crate::transitions::status::can_apply_status;
use crate::transitions::Frame;
use crate::types::{type_effectiveness, Type};

/// Replace the active Pokémon on `side` with reserve member `incoming`.
///
/// Everything tied to the outgoing Pokémon's time on the field is undone
/// first, so the incoming one starts clean.
pub(crate) fn switch_in(frame: &mut Frame, side: SideRef, incoming: &str) {
    leave_field(frame, side);

    let previous = frame.state().active(side).id.clone();
    frame.push(Instruction::Switch {
        side,
        previous,
        next: incoming.to_string(),
    });
    let previous = frame.state().side(side).last_used_move.clone();
    frame.push(Instruction::SetLastUsedMove {
        side,
        new: LastUsedMove {
            pokemon: incoming.to_string(),
            move_id: format!("switch {incoming}"),
        },
        previous,
    });

    entry_hazards(frame, side);

    let pokemon = frame.state().active(side);
    if pokemon.is_alive() {
        if let Some(hook) = ability_hooks(&pokemon.ability).and_then(|h| h.on_switch_in) {
            let instructions = hook(frame.state(), side);
            frame.push_all(instructions);
        }
    }
}

fn leave_field(frame: &mut Frame, side: SideRef) {
    let pokemon = frame.state().active(side);
    if pokemon.is_alive() {
        if let Some(hook) = ability_hooks(&pokemon.ability).and_then(|h| h.on_switch_out) {
            let instructions = hook(frame.state(), side);
            frame.push_all(instructions);
        }
    }

    let pokemon = frame.state().active(side);
    let mut instructions = Vec::new();
    for m in pokemon.moves.iter().filter(|m| m.disabled) {
        instructions.push(Instruction::EnableMove {
            side,
            move_id: m.id.clone(),
        });
    }
    if let Some(species) = lookup_species(&pokemon.id) {
        let original = species.types();
        if pokemon.types != original {
            instructions.push(Instruction::ChangeType {
                side,
                new: original,
                previous: pokemon.types.clone(),
            });
        }
    }
    for stat in Stat::ALL {
        let stage = pokemon.boost(stat);
        if stage != 0 {
            instructions.push(Instruction::Boost {
                side,
                stat,
                amount: -stage,
            });
        }
    }
    if !pokemon.volatiles.is_empty() {
        instructions.push(Instruction::RemoveVolatileStatus {
            side,
            volatile: pokemon.volatiles,
        });
    }
    let conditions = &frame.state().side(side).side_conditions;
    for condition in [SideCondition::ToxicCount, SideCondition::Protect] {
        let amount = conditions.get(condition);
        if amount > 0 {
            instructions.push(Instruction::SideEnd {
                side,
                condition,
                amount,
            });
        }
    }
    frame.push_all(instructions);
}

fn entry_hazards(frame: &mut Frame, side: SideRef) {
    let state = frame.state();
    let pokemon = state.active(side);
    if pokemon.has_item("heavydutyboots") {
        return;
    }
    let conditions = state.side(side).side_conditions;
    let grounded = pokemon.is_grounded();
    let magic_guard = pokemon.has_ability("magicguard");

    if conditions.has(SideCondition::StealthRock) && !magic_guard {
        let fraction = type_effectiveness(Type::Rock, &pokemon.types) / 8.0;
        if let Some(damage) = Instruction::damage_fraction(side, pokemon, fraction) {
            frame.push(damage);
        }
    }

    let spikes = conditions.get(SideCondition::Spikes);
    if spikes > 0 && grounded && !magic_guard {
        let fraction = match spikes {
            1 => 1.0 / 8.0,
            2 => 1.0 / 6.0,
            _ => 1.0 / 4.0,
        };
        let pokemon = frame.state().active(side);
        if let Some(damage) = Instruction::damage_fraction(side, pokemon, fraction) {
            frame.push(damage);
        }
    }

    let toxic_spikes = conditions.get(SideCondition::ToxicSpikes);
    if toxic_spikes > 0 && grounded {
        let pokemon = frame.state().active(side);
        if pokemon.has_type(Type::Poison) {
            frame.push(Instruction::SideEnd {
                side,
                condition: SideCondition::ToxicSpikes,
                amount: toxic_spikes,
            });
        } else {
            let status = if toxic_spikes >= 2 { Status::Toxic } else { Status::Poison };
            if can_apply_status(frame.state(), side, status, true) {
                frame.push(Instruction::ApplyStatus { side, status });
            }
        }
    }

    if conditions.has(SideCondition::StickyWeb) && grounded {
        let drop = Boosts::NONE.with(Stat::Speed, -1);
        let instructions = boost_instructions(frame.state(), side, &drop, true);
        frame.push_all(instructions);
    }
}

/// Reserve member to bring in after a self-switching move: the one with the
/// best type matchup against the opposing active, then the most HP.
pub fn best_switch(state: &State, side: SideRef) -> Option<String> {
    let opponent = state.active(side.opposite());
    let mut best: Option<(&Pokemon, f64)> = None;
    for candidate in state.side(side).alive_reserves() {
        let score = matchup(candidate, opponent) + candidate.hp_fraction();
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(pokemon, _)| pokemon.id.clone())
}

fn matchup(pokemon: &Pokemon, opponent: &Pokemon) -> f64 {
    let strongest = |attacker: &Pokemon, defender: &Pokemon| {
        attacker
            .types
            .iter()
            .filter(|t| **t != Type::Typeless)
            .map(|t| type_effectiveness(*t, &defender.types))
            .fold(0.0, f64::max)
    };
    strongest(pokemon, opponent) - strongest(opponent, pokemon)
}
