//! Stat stage changes.
//!
//! Every source of boosts (moves, secondaries, hazards, abilities) goes
//! through [`boost_instructions`] so that Contrary, Simple, Clear Body, Mist
//! and Defiant apply uniformly.

use crate::abilities::{ability_hooks, STAT_DROP_IMMUNE};
use crate::instruction::Instruction;
use crate::moves::Boosts;
use crate::state::{SideCondition, SideRef, Stat, State, BOOST_STATS, MAX_BOOST};

/// Instructions that apply `boosts` to the active Pokémon on `side`.
///
/// `from_opponent` marks drops caused by the other side; only those are
/// blocked by Mist and Clear Body, and only those trigger Defiant and
/// Competitive. Each emitted `Boost` carries the clamped delta.
pub fn boost_instructions(
    state: &State,
    side: SideRef,
    boosts: &Boosts,
    from_opponent: bool,
) -> Vec<Instruction> {
    let target = state.active(side);
    if !target.is_alive() {
        return Vec::new();
    }

    let mut stages = target.boosts;
    let mut instructions = Vec::new();
    let lowered = push_boosts(state, side, boosts, from_opponent, &mut stages, &mut instructions);

    if lowered {
        let retaliation = match target.ability.as_str() {
            "defiant" => Some(Stat::Attack),
            "competitive" => Some(Stat::SpecialAttack),
            _ => None,
        };
        if let Some(stat) = retaliation {
            let boosts = Boosts::NONE.with(stat, 2);
            push_boosts(state, side, &boosts, false, &mut stages, &mut instructions);
        }
    }
    instructions
}

/// Push clamped deltas, tracking the running stages. Returns whether any
/// stat was lowered by the opponent.
fn push_boosts(
    state: &State,
    side: SideRef,
    boosts: &Boosts,
    from_opponent: bool,
    stages: &mut [i8; BOOST_STATS],
    instructions: &mut Vec<Instruction>,
) -> bool {
    let target = state.active(side);
    let stat_change = ability_hooks(&target.ability).and_then(|h| h.on_stat_change);
    let protected = state.side(side).side_conditions.has(SideCondition::Mist)
        || STAT_DROP_IMMUNE.contains(&target.ability.as_str());

    let mut lowered = false;
    for (stat, amount) in boosts.iter() {
        let amount = stat_change.map_or(amount, |hook| hook(amount));
        if from_opponent && amount < 0 && protected {
            continue;
        }
        let current = stages[stat as usize];
        let delta = (current + amount).clamp(-MAX_BOOST, MAX_BOOST) - current;
        if delta == 0 {
            continue;
        }
        stages[stat as usize] += delta;
        instructions.push(Instruction::Boost {
            side,
            stat,
            amount: delta,
        });
        if from_opponent && delta < 0 {
            lowered = true;
        }
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::state::Side;

    fn state_with(ability: &str) -> State {
        State::new(
            Side::new(PokemonConfig::new("kingambit").ability(ability).build().unwrap(), []),
            Side::new(PokemonConfig::new("garchomp").build().unwrap(), []),
        )
    }

    #[test]
    fn test_clamps_at_six() {
        let mut state = state_with("");
        state.user.active.boosts[Stat::Attack as usize] = 5;
        let instructions =
            boost_instructions(&state, SideRef::User, &Boosts::NONE.with(Stat::Attack, 2), false);
        assert_eq!(
            instructions,
            vec![Instruction::Boost { side: SideRef::User, stat: Stat::Attack, amount: 1 }]
        );

        state.user.active.boosts[Stat::Attack as usize] = 6;
        assert!(boost_instructions(&state, SideRef::User, &Boosts::NONE.with(Stat::Attack, 2), false).is_empty());
    }

    #[test]
    fn test_defiant_retaliates() {
        let state = state_with("defiant");
        let instructions =
            boost_instructions(&state, SideRef::User, &Boosts::NONE.with(Stat::Attack, -1), true);
        assert_eq!(
            instructions,
            vec![
                Instruction::Boost { side: SideRef::User, stat: Stat::Attack, amount: -1 },
                Instruction::Boost { side: SideRef::User, stat: Stat::Attack, amount: 2 },
            ]
        );
    }

    #[test]
    fn test_contrary_and_simple() {
        let state = state_with("contrary");
        let instructions =
            boost_instructions(&state, SideRef::User, &Boosts::NONE.with(Stat::Defense, -1), false);
        assert_eq!(
            instructions,
            vec![Instruction::Boost { side: SideRef::User, stat: Stat::Defense, amount: 1 }]
        );

        let state = state_with("simple");
        let instructions =
            boost_instructions(&state, SideRef::User, &Boosts::NONE.with(Stat::Speed, 1), false);
        assert_eq!(
            instructions,
            vec![Instruction::Boost { side: SideRef::User, stat: Stat::Speed, amount: 2 }]
        );
    }

    #[test]
    fn test_clear_body_and_mist_block_opponent_drops() {
        let state = state_with("clearbody");
        let drop = Boosts::NONE.with(Stat::Attack, -1);
        assert!(boost_instructions(&state, SideRef::User, &drop, true).is_empty());
        // Self-inflicted drops still land
        assert_eq!(boost_instructions(&state, SideRef::User, &drop, false).len(), 1);

        let mut state = state_with("");
        *state.user.side_conditions.get_mut(SideCondition::Mist) = 3;
        assert!(boost_instructions(&state, SideRef::User, &drop, true).is_empty());
    }
}
