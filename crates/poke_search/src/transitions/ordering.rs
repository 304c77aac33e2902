//! Turn order.

use crate::abilities::ability_hooks;
use crate::action::Action;
use crate::items::item_hooks;
use crate::moves::lookup_move;
use crate::state::{SideCondition, SideRef, Stat, State, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOrder {
    First(SideRef),
    /// Same priority and speed: each order happens half the time.
    SpeedTie,
}

/// Speed used for turn order: boosted stat, then ability and item hooks,
/// paralysis and Tailwind.
pub fn effective_speed(state: &State, side: SideRef) -> f64 {
    let pokemon = state.active(side);
    let mut speed = pokemon.boosted_stat(Stat::Speed);

    if let Some(hook) = ability_hooks(&pokemon.ability).and_then(|h| h.on_modify_speed) {
        speed = hook(speed, pokemon, state);
    }
    if let Some(hook) = item_hooks(&pokemon.item).and_then(|h| h.on_modify_speed) {
        speed = hook(speed, pokemon, state);
    }
    if pokemon.status == Status::Paralysis && !pokemon.has_ability("quickfeet") {
        speed *= 0.5;
    }
    if state.side(side).side_conditions.has(SideCondition::Tailwind) {
        speed *= 2.0;
    }
    speed.floor()
}

/// Priority bracket of `action`. Switches outrank every move; a side with
/// nothing to do goes last.
fn priority(state: &State, side: SideRef, action: &Action) -> i16 {
    match action {
        Action::Switch(_) => i16::MAX,
        Action::None => i16::MIN,
        Action::Move(id) => {
            let mv = lookup_move(id);
            let pokemon = state.active(side);
            let bonus = ability_hooks(&pokemon.ability)
                .and_then(|h| h.on_modify_priority)
                .map_or(0, |hook| hook(mv, pokemon));
            mv.priority as i16 + bonus as i16
        }
    }
}

/// Which side acts first this turn.
pub fn move_order(state: &State, user_action: &Action, opponent_action: &Action) -> MoveOrder {
    let user_priority = priority(state, SideRef::User, user_action);
    let opponent_priority = priority(state, SideRef::Opponent, opponent_action);
    if user_priority != opponent_priority {
        return MoveOrder::First(if user_priority > opponent_priority {
            SideRef::User
        } else {
            SideRef::Opponent
        });
    }

    let user_speed = effective_speed(state, SideRef::User);
    let opponent_speed = effective_speed(state, SideRef::Opponent);
    if user_speed == opponent_speed {
        return MoveOrder::SpeedTie;
    }
    // Trick Room reverses speed, never priority
    let user_faster = (user_speed > opponent_speed) != state.trick_room;
    MoveOrder::First(if user_faster {
        SideRef::User
    } else {
        SideRef::Opponent
    })
}
