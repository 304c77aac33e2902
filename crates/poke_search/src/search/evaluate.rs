//! Static evaluation of a position from the user's point of view.
//!
//! The score is additive: each side's Pokémon and side conditions are
//! scored independently, the opponent's total is subtracted, and a small
//! bonus is added for the matchup between the two actives.

use crate::state::{Pokemon, Side, SideCondition, SideRef, Stat, State, Status, Volatiles};
use crate::transitions::effective_speed;
use crate::types::{type_effectiveness, Type};

/// Base reward for winning, scaled by the depth left when it happens.
pub const WON_BATTLE: f64 = 1000.0;

const POKEMON_ALIVE: f64 = 30.0;
const POKEMON_HP: f64 = 100.0;

const BURNED: f64 = -25.0;
const FROZEN: f64 = -40.0;
const ASLEEP: f64 = -25.0;
const PARALYZED: f64 = -25.0;
const TOXIC: f64 = -30.0;
const POISONED: f64 = -10.0;

const ATTACK_STAGE: f64 = 15.0;
const DEFENSE_STAGE: f64 = 15.0;
const SPECIAL_ATTACK_STAGE: f64 = 15.0;
const SPECIAL_DEFENSE_STAGE: f64 = 15.0;
const SPEED_STAGE: f64 = 25.0;
const ACCURACY_STAGE: f64 = 3.0;
const EVASION_STAGE: f64 = 3.0;

const CONFUSED: f64 = -20.0;
const LEECH_SEEDED: f64 = -30.0;
const SUBSTITUTE: f64 = 40.0;
const TAUNTED: f64 = -5.0;

const REFLECT_TURN: f64 = 10.0;
const LIGHT_SCREEN_TURN: f64 = 10.0;
const AURORA_VEIL_TURN: f64 = 15.0;
const TAILWIND_TURN: f64 = 7.0;
const SAFEGUARD_TURN: f64 = 3.0;
/// Hazards cost more the more Pokémon are left to switch into them.
const STEALTH_ROCK: f64 = -10.0;
const SPIKES_LAYER: f64 = -7.0;
const TOXIC_SPIKES_LAYER: f64 = -7.0;
const STICKY_WEB: f64 = -15.0;

const FASTER: f64 = 10.0;
const EFFECTIVENESS: f64 = 10.0;

/// Positive when the position favours the user.
pub fn evaluate(state: &State) -> f64 {
    side_score(&state.user) - side_score(&state.opponent) + matchup_score(state)
}

fn side_score(side: &Side) -> f64 {
    let active = std::iter::once(&side.active);
    let team_score: f64 = active.chain(side.reserve.values()).map(pokemon_score).sum();
    team_score + conditions_score(side)
}

fn pokemon_score(pokemon: &Pokemon) -> f64 {
    if !pokemon.is_alive() {
        return 0.0;
    }
    let mut score = POKEMON_ALIVE + POKEMON_HP * pokemon.hp_fraction();

    score += match pokemon.status {
        Status::Burn => BURNED,
        Status::Freeze => FROZEN,
        Status::Sleep => ASLEEP,
        Status::Paralysis => PARALYZED,
        Status::Toxic => TOXIC,
        Status::Poison => POISONED,
        Status::None => 0.0,
    };
    score += boosts_score(pokemon);

    let volatiles = [
        (Volatiles::CONFUSION, CONFUSED),
        (Volatiles::LEECH_SEED, LEECH_SEEDED),
        (Volatiles::SUBSTITUTE, SUBSTITUTE),
        (Volatiles::TAUNT, TAUNTED),
    ];
    for (volatile, weight) in volatiles {
        if pokemon.volatiles.contains(volatile) {
            score += weight;
        }
    }
    score
}

/// Stages past +/-2 give diminishing returns.
fn boosts_score(pokemon: &Pokemon) -> f64 {
    let weight = |stat: Stat| match stat {
        Stat::Attack => ATTACK_STAGE,
        Stat::Defense => DEFENSE_STAGE,
        Stat::SpecialAttack => SPECIAL_ATTACK_STAGE,
        Stat::SpecialDefense => SPECIAL_DEFENSE_STAGE,
        Stat::Speed => SPEED_STAGE,
        Stat::Accuracy => ACCURACY_STAGE,
        Stat::Evasion => EVASION_STAGE,
    };
    Stat::ALL
        .iter()
        .map(|&stat| {
            let stage = f64::from(pokemon.boost(stat));
            let effective = if stage.abs() > 2.0 {
                stage.signum() * (2.0 + (stage.abs() - 2.0) * 0.5)
            } else {
                stage
            };
            effective * weight(stat)
        })
        .sum()
}

fn conditions_score(side: &Side) -> f64 {
    let conditions = &side.side_conditions;
    let exposed = side.alive_reserves().count() as f64;
    let count = |c: SideCondition| f64::from(conditions.get(c));

    REFLECT_TURN * count(SideCondition::Reflect)
        + LIGHT_SCREEN_TURN * count(SideCondition::LightScreen)
        + AURORA_VEIL_TURN * count(SideCondition::AuroraVeil)
        + TAILWIND_TURN * count(SideCondition::Tailwind)
        + SAFEGUARD_TURN * count(SideCondition::Safeguard)
        + exposed
            * (STEALTH_ROCK * count(SideCondition::StealthRock)
                + SPIKES_LAYER * count(SideCondition::Spikes)
                + TOXIC_SPIKES_LAYER * count(SideCondition::ToxicSpikes)
                + STICKY_WEB * count(SideCondition::StickyWeb))
}

/// Speed and type matchup of the two actives.
fn matchup_score(state: &State) -> f64 {
    let user = &state.user.active;
    let opponent = &state.opponent.active;
    if !user.is_alive() || !opponent.is_alive() {
        return 0.0;
    }

    let user_speed = effective_speed(state, SideRef::User);
    let opponent_speed = effective_speed(state, SideRef::Opponent);
    let mut score = if user_speed == opponent_speed {
        0.0
    } else if (user_speed > opponent_speed) != state.trick_room {
        FASTER
    } else {
        -FASTER
    };

    score += EFFECTIVENESS * (best_stab(user, opponent) - best_stab(opponent, user));
    score
}

fn best_stab(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    attacker
        .types
        .iter()
        .filter(|t| **t != Type::Typeless)
        .map(|t| type_effectiveness(*t, &defender.types))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;

    fn mirror() -> State {
        State::new(
            Side::new(PokemonConfig::new("blissey").build().unwrap(), []),
            Side::new(PokemonConfig::new("blissey").build().unwrap(), []),
        )
    }

    #[test]
    fn test_mirror_is_even() {
        assert_eq!(evaluate(&mirror()), 0.0);
    }

    #[test]
    fn test_damage_and_status_lower_score() {
        let mut s = mirror();
        let even = evaluate(&s);
        s.user.active.hp = (s.user.active.max_hp / 2.0).floor();
        let hurt = evaluate(&s);
        assert!(hurt < even);
        s.user.active.status = Status::Burn;
        assert!(evaluate(&s) < hurt);
    }

    #[test]
    fn test_boosts_raise_score() {
        let mut s = mirror();
        s.user.active.boosts[Stat::Attack as usize] = 2;
        assert_eq!(evaluate(&s), 2.0 * ATTACK_STAGE);
        s.user.active.boosts[Stat::Attack as usize] = 6;
        assert_eq!(evaluate(&s), 4.0 * ATTACK_STAGE);
    }

    #[test]
    fn test_hazards_scale_with_reserves() {
        let mut s = State::new(
            Side::new(
                PokemonConfig::new("blissey").build().unwrap(),
                [
                    PokemonConfig::new("skarmory").build().unwrap(),
                    PokemonConfig::new("toxapex").build().unwrap(),
                ],
            ),
            Side::new(PokemonConfig::new("blissey").build().unwrap(), []),
        );
        let clean = evaluate(&s);
        *s.user.side_conditions.get_mut(SideCondition::StealthRock) = 1;
        assert!((evaluate(&s) - (clean + 2.0 * STEALTH_ROCK)).abs() < 1e-9);
    }

    #[test]
    fn test_faster_active_gets_bonus() {
        let mut s = mirror();
        *s.user.side_conditions.get_mut(SideCondition::Tailwind) = 1;
        assert_eq!(evaluate(&s), TAILWIND_TURN + FASTER);
    }
}
