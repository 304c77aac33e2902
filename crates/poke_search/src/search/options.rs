//! Legal actions for each side.

use crate::action::Action;
use crate::items::CHOICE_ITEMS;
use crate::moves::{lookup_move, MoveFlags};
use crate::state::{SideCondition, SideRef, State, Volatiles};
use crate::types::Type;

/// Fallback when every move is out of PP or otherwise unusable.
pub const STRUGGLE: &str = "struggle";

/// Options for both sides, user first.
///
/// A side that has to replace a fainted Pokémon (or was forced out) may only
/// switch, and the other side waits with [`Action::None`] unless it has to
/// replace one too.
pub fn get_options(state: &State) -> (Vec<Action>, Vec<Action>) {
    let user_forced = must_switch(state, SideRef::User);
    let opponent_forced = must_switch(state, SideRef::Opponent);

    if user_forced || opponent_forced {
        let forced = |side, forced| {
            if forced {
                switches(state, side)
            } else {
                vec![Action::None]
            }
        };
        let user = forced(SideRef::User, user_forced);
        let opponent = forced(SideRef::Opponent, opponent_forced);
        return (or_none(user), or_none(opponent));
    }

    (side_options(state, SideRef::User), side_options(state, SideRef::Opponent))
}

/// Moves and switches for a side acting normally this turn.
pub fn side_options(state: &State, side: SideRef) -> Vec<Action> {
    if state.side(side).wait {
        return vec![Action::None];
    }
    let mut options = moves(state, side);
    if !is_trapped(state, side) {
        options.extend(switches(state, side));
    }
    options
}

fn or_none(options: Vec<Action>) -> Vec<Action> {
    if options.is_empty() {
        vec![Action::None]
    } else {
        options
    }
}

fn must_switch(state: &State, side: SideRef) -> bool {
    let s = state.side(side);
    (s.force_switch || !s.active.is_alive()) && s.alive_reserves().next().is_some()
}

fn moves(state: &State, side: SideRef) -> Vec<Action> {
    let pokemon = state.active(side);
    let taunted = pokemon.volatiles.contains(Volatiles::TAUNT);
    let protect_timer = state.side(side).side_conditions.has(SideCondition::Protect);

    let mut usable: Vec<&str> = pokemon
        .moves
        .iter()
        .filter(|m| m.pp > 0 && !m.disabled)
        .map(|m| m.id.as_str())
        .filter(|id| {
            let mv = lookup_move(id);
            !(taunted && !mv.is_damaging()) && !(protect_timer && mv.flags.contains(MoveFlags::PROTECTION))
        })
        .collect();

    // Choice items and Gorilla Tactics lock into the move used since switching in
    let last = &state.side(side).last_used_move;
    let choice_locked = CHOICE_ITEMS.contains(&pokemon.item.as_str()) || pokemon.has_ability("gorillatactics");
    if choice_locked && last.pokemon == pokemon.id && !last.switched_in() {
        if usable.contains(&last.move_id.as_str()) {
            usable.retain(|id| *id == last.move_id);
        }
    }

    if usable.is_empty() {
        return vec![Action::Move(STRUGGLE.to_string())];
    }
    usable.into_iter().map(|id| Action::Move(id.to_string())).collect()
}

fn switches(state: &State, side: SideRef) -> Vec<Action> {
    state
        .side(side)
        .alive_reserves()
        .map(|p| Action::switch(p.id.clone()))
        .collect()
}

/// Whether `side` is kept in by its own flag or the foe's trapping ability.
/// Ghost types always escape abilities.
pub fn is_trapped(state: &State, side: SideRef) -> bool {
    if state.side(side).trapped {
        return true;
    }
    let pokemon = state.active(side);
    let foe = state.active(side.opposite());
    if !foe.is_alive() || pokemon.has_type(Type::Ghost) || pokemon.has_item("shedshell") {
        return false;
    }
    match foe.ability.as_str() {
        "shadowtag" => !pokemon.has_ability("shadowtag"),
        "arenatrap" => pokemon.is_grounded(),
        "magnetpull" => pokemon.has_type(Type::Steel),
        _ => false,
    }
}
