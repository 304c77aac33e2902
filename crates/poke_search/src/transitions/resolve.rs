//! Resolving one side's action.
//!
//! A move runs through a fixed sequence of stages. Each stage sees the
//! state with every earlier instruction of its branch applied, and either
//! appends instructions, splits the branch by probability, or freezes it so
//! that later stages leave it alone.

use crate::abilities::AbilityHooks;
use crate::action::Action;
use crate::chain::{modify_move, MoveContext};
use crate::config::DamageRollMode;
use crate::damage::{calculate_damage, hit_chance, move_effectiveness, DamageConditions};
use crate::instruction::{hp_fraction, Instruction, StateInstructions};
use crate::items::CHOICE_ITEMS;
use crate::moves::{
    lookup_move, EffectTarget, HazardClear, Move, MoveFlags, Secondary, SecondaryEffect, SpecialEffect,
};
use crate::mutator::StateMutator;
use crate::state::{
    FutureSight, LastUsedMove, SideCondition, SideRef, Stat, State, Status, Volatiles, Wish, MAX_BOOST,
};
use crate::transitions::boosts::boost_instructions;
use crate::transitions::status::{can_apply_status, can_apply_volatile};
use crate::transitions::switch::{best_switch, switch_in};
use crate::transitions::{expand, Frame, Outcome, TurnContext};
use crate::types::Type;

/// Chance of waking up at the start of each turn asleep.
const WAKE_CHANCE: f64 = 1.0 / 3.0;
const THAW_CHANCE: f64 = 0.2;
const FULL_PARALYSIS_CHANCE: f64 = 0.25;

/// Ignore the damage of Rough Skin, Iron Barbs and Rocky Helmet.
const CONTACT_SAFE: [&str; 2] = ["longreach", "magicguard"];

impl From<StateInstructions> for Outcome {
    fn from(branch: StateInstructions) -> Self {
        Outcome {
            chance: branch.percentage,
            instructions: branch.instructions,
            frozen: branch.frozen,
        }
    }
}

/// Extend `branches` with the action `side` chose this turn.
pub(crate) fn resolve_action(
    mutator: &mut StateMutator,
    turn: &TurnContext,
    side: SideRef,
    first_move: bool,
    branches: Vec<StateInstructions>,
) -> Vec<StateInstructions> {
    match turn.action(side) {
        Action::None => branches,
        Action::Switch(target) => expand(mutator, branches, |m| {
            let side_state = m.state.side(side);
            let valid = side_state.active.id != *target
                && side_state.reserve.get(target).is_some_and(|p| p.is_alive());
            if !valid {
                return vec![Outcome::certain(Vec::new())];
            }
            let mut frame = Frame::new(m);
            switch_in(&mut frame, side, target);
            vec![Outcome::certain(frame.finish())]
        }),
        Action::Move(id) => expand(mutator, branches, |m| {
            let attacker = m.state.active(side);
            if !attacker.is_alive() || attacker.id != turn.starting_active(side) {
                return vec![Outcome::certain(Vec::new())];
            }
            let defending_move = match turn.action(side.opposite()) {
                Action::Move(other) => Some(lookup_move(other)),
                _ => None,
            };
            let ctx = MoveContext::new(m.state, side, defending_move, first_move);
            let mv = modify_move(lookup_move(id), &ctx);
            resolve_move(m, side, id, &mv, first_move, turn.mode)
                .into_iter()
                .map(Outcome::from)
                .collect()
        }),
    }
}

/// State a move resolves against, fixed for the whole resolution.
struct MoveUse<'a> {
    side: SideRef,
    /// Id the action named. Differs from `mv.id` when the dex does not
    /// know the move.
    id: &'a str,
    mv: Move,
    first_move: bool,
    mode: DamageRollMode,
}

impl MoveUse<'_> {
    fn target(&self) -> SideRef {
        self.side.opposite()
    }

    /// Side that receives the move's primary effects.
    fn recipient(&self) -> SideRef {
        if self.mv.targets_opponent() {
            self.target()
        } else {
            self.side
        }
    }

    fn blocked_by_substitute(&self, state: &State) -> bool {
        let defender = state.active(self.target());
        defender.volatiles.contains(Volatiles::SUBSTITUTE)
            && !self.mv.flags.contains(MoveFlags::BYPASS_SUBSTITUTE)
            && !state.active(self.side).has_ability("infiltrator")
    }

    fn crash(&self, state: &State) -> Vec<Instruction> {
        if self.mv.crash <= 0.0 || state.active(self.side).has_ability("magicguard") {
            return Vec::new();
        }
        Instruction::damage_fraction(self.side, state.active(self.side), self.mv.crash)
            .into_iter()
            .collect()
    }
}

/// Every outcome of `side` using `mv`, already run through the modifier
/// chain, relative to the current state.
///
/// Branch percentages sum to 1. The state is left untouched.
pub fn generate_move_instructions(
    mutator: &mut StateMutator,
    side: SideRef,
    mv: &Move,
    first_move: bool,
    mode: DamageRollMode,
) -> Vec<StateInstructions> {
    resolve_move(mutator, side, mv.id, mv, first_move, mode)
}

fn resolve_move(
    mutator: &mut StateMutator,
    side: SideRef,
    id: &str,
    mv: &Move,
    first_move: bool,
    mode: DamageRollMode,
) -> Vec<StateInstructions> {
    let u = MoveUse {
        side,
        id,
        mv: *mv,
        first_move,
        mode,
    };

    let mut branches = vec![StateInstructions::default()];
    branches = expand(mutator, branches, |m| gates(m.state, &u));
    branches = expand(mutator, branches, |m| vec![Outcome::certain(bookkeeping(m.state, &u))]);
    if !u.mv.has_effect() {
        return branches.into_iter().map(StateInstructions::frozen).collect();
    }

    branches = expand(mutator, branches, |m| target_check(m.state, &u));
    branches = expand(mutator, branches, |m| protection(m.state, &u));
    branches = expand(mutator, branches, |m| accuracy(m.state, &u));
    branches = expand(mutator, branches, |m| special_effect(m, &u));
    branches = expand(mutator, branches, |m| damage(m, &u));
    branches = expand(mutator, branches, |m| vec![Outcome::certain(primary_effects(m, &u))]);
    branches = expand(mutator, branches, |m| secondary(m.state, &u));
    branches = expand(mutator, branches, |m| vec![Outcome::certain(boosts_and_heal(m, &u))]);
    branches = expand(mutator, branches, |m| drag(m, &u));
    branches = expand(mutator, branches, |m| vec![Outcome::certain(self_switch(m, &u))]);
    branches
}

// ============================================================================
// Before the move
// ============================================================================

fn gates(state: &State, u: &MoveUse) -> Vec<Outcome> {
    let attacker = state.active(u.side);
    if attacker.volatiles.contains(Volatiles::FLINCH) {
        return vec![Outcome::certain(Vec::new()).frozen()];
    }
    if attacker.volatiles.contains(Volatiles::TAUNT) && !u.mv.is_damaging() {
        return vec![Outcome::certain(Vec::new()).frozen()];
    }

    let side = u.side;
    match attacker.status {
        Status::Sleep => {
            let wake = Instruction::RemoveStatus {
                side,
                status: Status::Sleep,
            };
            let asleep = Outcome::new(1.0 - WAKE_CHANCE, Vec::new());
            let asleep = if u.mv.flags.contains(MoveFlags::SLEEP_USABLE) {
                asleep
            } else {
                asleep.frozen()
            };
            vec![Outcome::new(WAKE_CHANCE, vec![wake]), asleep]
        }
        Status::Freeze => {
            let thaw = Instruction::RemoveStatus {
                side,
                status: Status::Freeze,
            };
            if u.mv.flags.contains(MoveFlags::DEFROST) {
                vec![Outcome::certain(vec![thaw])]
            } else {
                vec![
                    Outcome::new(THAW_CHANCE, vec![thaw]),
                    Outcome::new(1.0 - THAW_CHANCE, Vec::new()).frozen(),
                ]
            }
        }
        Status::Paralysis => vec![
            Outcome::new(1.0 - FULL_PARALYSIS_CHANCE, Vec::new()),
            Outcome::new(FULL_PARALYSIS_CHANCE, Vec::new()).frozen(),
        ],
        _ => vec![Outcome::certain(Vec::new())],
    }
}

/// PP, last used move, choice lock, and Protean / Libero.
fn bookkeeping(state: &State, u: &MoveUse) -> Vec<Instruction> {
    let side = u.side;
    let attacker = state.active(side);
    let mut instructions = Vec::new();

    if let Some(known) = attacker.find_move(u.id) {
        let cost = if state.active(u.target()).has_ability("pressure") { 2 } else { 1 };
        let amount = known.pp.min(cost);
        if amount > 0 {
            instructions.push(Instruction::DecrementPp {
                side,
                move_id: known.id.clone(),
                amount,
            });
        }
    }

    instructions.push(Instruction::SetLastUsedMove {
        side,
        new: LastUsedMove {
            pokemon: attacker.id.clone(),
            move_id: u.id.to_string(),
        },
        previous: state.side(side).last_used_move.clone(),
    });

    let locked = CHOICE_ITEMS.contains(&attacker.item.as_str()) || attacker.has_ability("gorillatactics");
    if locked && attacker.find_move(u.id).is_some() {
        for other in attacker.moves.iter().filter(|m| m.id != u.id && !m.disabled) {
            instructions.push(Instruction::DisableMove {
                side,
                move_id: other.id.clone(),
            });
        }
    }

    let changes_type = attacker.has_ability("protean") || attacker.has_ability("libero");
    if changes_type && u.mv.move_type != Type::Typeless && attacker.types != [u.mv.move_type] {
        instructions.push(Instruction::ChangeType {
            side,
            new: vec![u.mv.move_type],
            previous: attacker.types.clone(),
        });
    }
    instructions
}

fn target_check(state: &State, u: &MoveUse) -> Vec<Outcome> {
    if !u.mv.targets_opponent() {
        return vec![Outcome::certain(Vec::new())];
    }
    let defender = state.active(u.target());
    if !defender.is_alive() && u.mv.side_condition.is_none() {
        return vec![Outcome::certain(Vec::new()).frozen()];
    }
    if defender.volatiles.contains(Volatiles::PROTECT) && u.mv.flags.contains(MoveFlags::PROTECT) {
        return vec![Outcome::certain(u.crash(state)).frozen()];
    }
    vec![Outcome::certain(Vec::new())]
}

/// Protect and friends: each consecutive use succeeds a third as often, and
/// moving second always fails.
fn protection(state: &State, u: &MoveUse) -> Vec<Outcome> {
    if !u.mv.flags.contains(MoveFlags::PROTECTION) {
        return vec![Outcome::certain(Vec::new())];
    }
    if !u.first_move {
        return vec![Outcome::certain(Vec::new()).frozen()];
    }
    let consecutive = state.side(u.side).side_conditions.get(SideCondition::Protect);
    let chance = (1.0_f64 / 3.0).powi(consecutive as i32);
    let success = vec![
        Instruction::ApplyVolatileStatus {
            side: u.side,
            volatile: Volatiles::PROTECT,
        },
        Instruction::SideStart {
            side: u.side,
            condition: SideCondition::Protect,
            amount: 1,
        },
    ];
    vec![
        Outcome::new(chance, success).frozen(),
        Outcome::new(1.0 - chance, Vec::new()).frozen(),
    ]
}

fn accuracy(state: &State, u: &MoveUse) -> Vec<Outcome> {
    let Some(accuracy) = u.mv.accuracy else {
        return vec![Outcome::certain(Vec::new())];
    };
    if !u.mv.targets_opponent() {
        return vec![Outcome::certain(Vec::new())];
    }
    let stage = (state.active(u.side).boost(Stat::Accuracy) - state.active(u.target()).boost(Stat::Evasion))
        .clamp(-MAX_BOOST, MAX_BOOST);
    let chance = hit_chance(accuracy, stage);
    if chance >= 1.0 {
        return vec![Outcome::certain(Vec::new())];
    }
    vec![
        Outcome::new(chance, Vec::new()),
        Outcome::new(1.0 - chance, u.crash(state)).frozen(),
    ]
}

// ============================================================================
// The move itself
// ============================================================================

fn special_effect(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Outcome> {
    let Some(special) = u.mv.special else {
        return vec![Outcome::certain(Vec::new())];
    };
    let side = u.side;
    let mut frame = Frame::new(mutator);
    let mut frozen = false;

    match special {
        SpecialEffect::Wish => {
            let user_side = frame.state().side(side);
            if user_side.wish.turns == 0 {
                let wish = Wish {
                    turns: 2,
                    amount: hp_fraction(&user_side.active, 0.5),
                };
                let previous = user_side.wish;
                frame.push(Instruction::SetWish {
                    side,
                    new: wish,
                    previous,
                });
            }
        }
        SpecialEffect::FutureSight => {
            let target = u.target();
            let pending = &frame.state().side(target).future_sight;
            if pending.turns == 0 {
                let previous = pending.clone();
                let source = frame.state().active(side).id.clone();
                frame.push(Instruction::SetFutureSight {
                    side: target,
                    new: FutureSight { turns: 3, source },
                    previous,
                });
            }
            // The damage lands later, from end of turn
            frozen = true;
        }
        SpecialEffect::TrickRoom => frame.push(Instruction::ToggleTrickRoom),
        SpecialEffect::Haze => {
            let mut instructions = Vec::new();
            for each in [SideRef::User, SideRef::Opponent] {
                let pokemon = frame.state().active(each);
                for stat in Stat::ALL {
                    let stage = pokemon.boost(stat);
                    if stage != 0 {
                        instructions.push(Instruction::Boost {
                            side: each,
                            stat,
                            amount: -stage,
                        });
                    }
                }
            }
            frame.push_all(instructions);
        }
        SpecialEffect::Rest => {
            let user = frame.state().active(side);
            let can_sleep = !(user.has_ability("insomnia") || user.has_ability("vitalspirit"));
            if user.hp < user.max_hp && user.status != Status::Sleep && can_sleep {
                let mut instructions = Vec::new();
                if !user.status.is_none() {
                    instructions.push(Instruction::RemoveStatus {
                        side,
                        status: user.status,
                    });
                }
                instructions.extend(Instruction::heal(side, user, user.max_hp - user.hp));
                instructions.push(Instruction::ApplyStatus {
                    side,
                    status: Status::Sleep,
                });
                frame.push_all(instructions);
            }
        }
    }

    let outcome = Outcome::certain(frame.finish());
    vec![if frozen { outcome.frozen() } else { outcome }]
}

fn damage(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Outcome> {
    let rolls = {
        let state = &*mutator.state;
        let conditions = DamageConditions::from_state(state, u.target());
        calculate_damage(state.active(u.side), state.active(u.target()), &u.mv, &conditions, u.mode)
    };
    let Some(rolls) = rolls else {
        return vec![Outcome::certain(Vec::new())];
    };
    if rolls.iter().all(|d| *d <= 0.0) {
        return vec![Outcome::certain(u.crash(mutator.state)).frozen()];
    }

    let chance = 1.0 / rolls.len() as f64;
    let mut outcomes = Vec::with_capacity(rolls.len());
    for roll in rolls {
        let mut frame = Frame::new(mutator);
        let frozen = apply_hit(&mut frame, u, roll);
        outcomes.push(Outcome {
            chance,
            instructions: frame.finish(),
            frozen,
        });
    }
    outcomes
}

/// Land one damage roll and everything that reacts to it. Returns whether
/// the move stops here (the hit only broke a substitute).
fn apply_hit(frame: &mut Frame, u: &MoveUse, damage: f64) -> bool {
    let side = u.side;
    let target = u.target();

    if u.blocked_by_substitute(frame.state()) {
        frame.push(Instruction::RemoveVolatileStatus {
            side: target,
            volatile: Volatiles::SUBSTITUTE,
        });
        return true;
    }

    let defender = frame.state().active(target);
    let mut dealt = damage.min(defender.hp);
    let mut sash = false;
    if dealt >= defender.hp && defender.hp == defender.max_hp && defender.max_hp > 1.0 {
        if defender.has_ability("sturdy") {
            dealt = defender.hp - 1.0;
        } else if defender.has_item("focussash") {
            dealt = defender.hp - 1.0;
            sash = true;
        }
    }
    let item = defender.item.clone();
    let contact_damage = if u.mv.flags.contains(MoveFlags::CONTACT) {
        let mut fraction = 0.0;
        if defender.has_ability("roughskin") || defender.has_ability("ironbarbs") {
            fraction += 1.0 / 8.0;
        }
        if defender.has_item("rockyhelmet") {
            fraction += 1.0 / 6.0;
        }
        fraction
    } else {
        0.0
    };

    if let Some(hit) = Instruction::damage(target, defender, dealt) {
        frame.push(hit);
    }
    let pops_item = sash || (item == "airballoon" && dealt > 0.0) || (u.mv.id == "knockoff" && !item.is_empty());
    if pops_item {
        frame.push(Instruction::ChangeItem {
            side: target,
            new: String::new(),
            previous: item,
        });
    }

    let attacker = frame.state().active(side);
    let magic_guard = attacker.has_ability("magicguard");
    let mut instructions = Vec::new();
    if u.mv.drain > 0.0 && dealt > 0.0 {
        let amount = (dealt * u.mv.drain).floor().max(1.0);
        instructions.extend(Instruction::heal(side, attacker, amount));
    }
    frame.push_all(instructions);

    let mut recoil = 0.0;
    if u.mv.recoil > 0.0 && dealt > 0.0 && !attacker_has(frame, side, &["rockhead", "magicguard"]) {
        recoil += (dealt * u.mv.recoil).floor().max(1.0);
    }
    let attacker = frame.state().active(side);
    if attacker.has_item("lifeorb") && dealt > 0.0 && !magic_guard {
        recoil += hp_fraction(attacker, 0.1);
    }
    if contact_damage > 0.0 && !CONTACT_SAFE.contains(&attacker.ability.as_str()) {
        recoil += hp_fraction(attacker, contact_damage);
    }
    if let Some(instruction) = Instruction::damage(side, attacker, recoil) {
        frame.push(instruction);
    }
    false
}

fn attacker_has(frame: &Frame, side: SideRef, abilities: &[&str]) -> bool {
    abilities.contains(&frame.state().active(side).ability.as_str())
}

/// Side conditions, field effects, hazard removal, volatile and primary
/// status, in that order.
fn primary_effects(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Instruction> {
    let mut frame = Frame::new(mutator);
    let side = u.side;

    if let Some(condition) = u.mv.side_condition {
        let recipient = u.recipient();
        let state = frame.state();
        let current = state.side(recipient).side_conditions.get(condition);
        let amount = if SideCondition::HAZARDS.contains(&condition) {
            u8::from(current < condition.max_layers())
        } else if current == 0 {
            condition_duration(condition, state.active(side).has_item("lightclay"))
        } else {
            0
        };
        if amount > 0 {
            frame.push(Instruction::SideStart {
                side: recipient,
                condition,
                amount,
            });
        }
    }

    if let Some(weather) = u.mv.weather {
        let instructions = AbilityHooks::set_weather(frame.state(), weather);
        frame.push_all(instructions);
    }
    if let Some(terrain) = u.mv.terrain {
        let instructions = AbilityHooks::set_terrain(frame.state(), terrain);
        frame.push_all(instructions);
    }

    if let Some(clear) = u.mv.hazard_clear {
        let instructions = hazard_clear(frame.state(), u, clear);
        frame.push_all(instructions);
    }

    if let Some(volatile) = u.mv.volatile_status {
        let instructions = volatile_status(frame.state(), u, volatile);
        frame.push_all(instructions);
    }

    if let Some(status) = u.mv.status {
        let state = frame.state();
        let recipient = u.recipient();
        let from_opponent = recipient != side;
        let attacker = state.active(side);
        let defender = state.active(recipient);
        let immune_by_type = !u.mv.is_damaging() && from_opponent && move_effectiveness(&u.mv, attacker, defender) == 0.0;
        let powder_immune = u.mv.flags.contains(MoveFlags::POWDER)
            && (defender.has_type(Type::Grass) || defender.has_ability("overcoat"));
        let behind_substitute = from_opponent && u.blocked_by_substitute(state);
        if !immune_by_type
            && !powder_immune
            && !behind_substitute
            && can_apply_status(state, recipient, status, from_opponent)
        {
            frame.push(Instruction::ApplyStatus {
                side: recipient,
                status,
            });
        }
    }

    frame.finish()
}

fn condition_duration(condition: SideCondition, light_clay: bool) -> u8 {
    match condition {
        SideCondition::Reflect | SideCondition::LightScreen | SideCondition::AuroraVeil => {
            if light_clay {
                8
            } else {
                5
            }
        }
        SideCondition::Tailwind => 4,
        SideCondition::Safeguard | SideCondition::Mist => 5,
        _ => 1,
    }
}

fn end_all(state: &State, side: SideRef, conditions: &[SideCondition], instructions: &mut Vec<Instruction>) {
    for &condition in conditions {
        let amount = state.side(side).side_conditions.get(condition);
        if amount > 0 {
            instructions.push(Instruction::SideEnd {
                side,
                condition,
                amount,
            });
        }
    }
}

fn hazard_clear(state: &State, u: &MoveUse, clear: HazardClear) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    match clear {
        HazardClear::RapidSpin => {
            if !state.active(u.side).is_alive() {
                return instructions;
            }
            end_all(state, u.side, &SideCondition::HAZARDS, &mut instructions);
            if state.active(u.side).volatiles.contains(Volatiles::LEECH_SEED) {
                instructions.push(Instruction::RemoveVolatileStatus {
                    side: u.side,
                    volatile: Volatiles::LEECH_SEED,
                });
            }
        }
        HazardClear::Defog => {
            end_all(state, u.side, &SideCondition::HAZARDS, &mut instructions);
            end_all(state, u.target(), &SideCondition::HAZARDS, &mut instructions);
            end_all(
                state,
                u.target(),
                &[
                    SideCondition::Reflect,
                    SideCondition::LightScreen,
                    SideCondition::AuroraVeil,
                    SideCondition::Safeguard,
                    SideCondition::Mist,
                ],
                &mut instructions,
            );
        }
        HazardClear::CourtChange => {
            let swappable = SideCondition::ALL
                .iter()
                .filter(|c| !matches!(c, SideCondition::Protect | SideCondition::ToxicCount));
            for &condition in swappable {
                let user = state.side(u.side).side_conditions.get(condition);
                let opponent = state.side(u.target()).side_conditions.get(condition);
                if user == opponent {
                    continue;
                }
                for (side, from, to) in [(u.side, user, opponent), (u.target(), opponent, user)] {
                    if from > 0 {
                        instructions.push(Instruction::SideEnd {
                            side,
                            condition,
                            amount: from,
                        });
                    }
                    if to > 0 {
                        instructions.push(Instruction::SideStart {
                            side,
                            condition,
                            amount: to,
                        });
                    }
                }
            }
        }
    }
    instructions
}

fn volatile_status(state: &State, u: &MoveUse, volatile: Volatiles) -> Vec<Instruction> {
    if u.mv.flags.contains(MoveFlags::PROTECTION) {
        return Vec::new();
    }
    let recipient = u.recipient();

    if volatile == Volatiles::SUBSTITUTE {
        let user = state.active(u.side);
        let cost = hp_fraction(user, 0.25);
        if user.volatiles.contains(Volatiles::SUBSTITUTE) || user.hp <= cost {
            return Vec::new();
        }
        return vec![
            Instruction::Damage {
                side: u.side,
                amount: cost,
            },
            Instruction::ApplyVolatileStatus {
                side: u.side,
                volatile,
            },
        ];
    }

    if recipient != u.side && u.blocked_by_substitute(state) {
        return Vec::new();
    }
    if !can_apply_volatile(state, recipient, volatile) {
        return Vec::new();
    }
    vec![Instruction::ApplyVolatileStatus {
        side: recipient,
        volatile,
    }]
}

fn secondary(state: &State, u: &MoveUse) -> Vec<Outcome> {
    let Some(Secondary { chance, effect }) = u.mv.secondary else {
        return vec![Outcome::certain(Vec::new())];
    };
    if state.active(u.target()).has_ability("shielddust") && !matches!(effect, SecondaryEffect::Boosts(_, EffectTarget::User)) {
        return vec![Outcome::certain(Vec::new())];
    }

    let target = u.target();
    let instructions = match effect {
        SecondaryEffect::Status(status) => {
            if can_apply_status(state, target, status, true) {
                vec![Instruction::ApplyStatus {
                    side: target,
                    status,
                }]
            } else {
                Vec::new()
            }
        }
        SecondaryEffect::Volatile(volatile) => {
            let allowed = volatile != Volatiles::FLINCH || u.first_move;
            if allowed && can_apply_volatile(state, target, volatile) {
                vec![Instruction::ApplyVolatileStatus {
                    side: target,
                    volatile,
                }]
            } else {
                Vec::new()
            }
        }
        SecondaryEffect::Boosts(boosts, EffectTarget::User) => boost_instructions(state, u.side, &boosts, false),
        SecondaryEffect::Boosts(boosts, EffectTarget::Target) => boost_instructions(state, target, &boosts, true),
    };
    if instructions.is_empty() {
        return vec![Outcome::certain(Vec::new())];
    }

    let chance = (chance / 100.0).clamp(0.0, 1.0);
    vec![
        Outcome::new(chance, instructions),
        Outcome::new(1.0 - chance, Vec::new()),
    ]
}

// ============================================================================
// After the move
// ============================================================================

fn boosts_and_heal(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Instruction> {
    let mut frame = Frame::new(mutator);
    let side = u.side;

    if !u.mv.boosts.is_empty() {
        let recipient = u.recipient();
        let from_opponent = recipient != side;
        if !(from_opponent && u.blocked_by_substitute(frame.state())) {
            let instructions = boost_instructions(frame.state(), recipient, &u.mv.boosts, from_opponent);
            frame.push_all(instructions);
        }
    }
    if !u.mv.self_boosts.is_empty() {
        let instructions = boost_instructions(frame.state(), side, &u.mv.self_boosts, false);
        frame.push_all(instructions);
    }

    if u.mv.heal != 0.0 {
        let recipient = match u.mv.heal_target {
            EffectTarget::User => side,
            EffectTarget::Target => u.target(),
        };
        let pokemon = frame.state().active(recipient);
        let instruction = if u.mv.heal > 0.0 {
            Instruction::heal_fraction(recipient, pokemon, u.mv.heal)
        } else {
            Instruction::damage_fraction(recipient, pokemon, -u.mv.heal)
        };
        frame.push_all(instruction);
    }

    frame.finish()
}

/// Roar, Whirlwind, Dragon Tail: the target is replaced by a random reserve.
fn drag(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Outcome> {
    let target = u.target();
    let state = &*mutator.state;
    let defender = state.active(target);
    let anchored = defender.has_ability("suctioncups") || defender.volatiles.contains(Volatiles::INGRAIN);
    if !u.mv.force_switch || !defender.is_alive() || anchored {
        return vec![Outcome::certain(Vec::new())];
    }
    let reserves: Vec<String> = state.side(target).alive_reserves().map(|p| p.id.clone()).collect();
    if reserves.is_empty() {
        return vec![Outcome::certain(Vec::new())];
    }

    let chance = 1.0 / reserves.len() as f64;
    let mut outcomes = Vec::with_capacity(reserves.len());
    for incoming in &reserves {
        let mut frame = Frame::new(mutator);
        switch_in(&mut frame, target, incoming);
        outcomes.push(Outcome::new(chance, frame.finish()));
    }
    outcomes
}

/// U-turn, Volt Switch, Parting Shot: the user picks its best reserve.
fn self_switch(mutator: &mut StateMutator, u: &MoveUse) -> Vec<Instruction> {
    if !u.mv.self_switch || !mutator.state.active(u.side).is_alive() {
        return Vec::new();
    }
    let Some(incoming) = best_switch(mutator.state, u.side) else {
        return Vec::new();
    };
    let mut frame = Frame::new(mutator);
    switch_in(&mut frame, u.side, &incoming);
    frame.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::state::Side;

    fn state(user: PokemonConfig, opponent: PokemonConfig) -> State {
        State::new(
            Side::new(
                user.build().unwrap(),
                [PokemonConfig::new("skarmory").build().unwrap()],
            ),
            Side::new(
                opponent.build().unwrap(),
                [PokemonConfig::new("ferrothorn").build().unwrap(), PokemonConfig::new("toxapex").build().unwrap()],
            ),
        )
    }

    fn resolve(s: &mut State, id: &str, first_move: bool) -> Vec<StateInstructions> {
        let mut mutator = StateMutator::new(s);
        let mv = *lookup_move(id);
        generate_move_instructions(&mut mutator, SideRef::User, &mv, first_move, DamageRollMode::Average)
    }

    fn total(branches: &[StateInstructions]) -> f64 {
        branches.iter().map(|b| b.percentage).sum()
    }

    #[test]
    fn test_never_hitting_move_is_one_frozen_branch() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("blissey"));
        let mv = Move {
            accuracy: Some(0.0),
            ..*lookup_move("earthquake")
        };
        let mut mutator = StateMutator::new(&mut s);
        let branches = generate_move_instructions(&mut mutator, SideRef::User, &mv, true, DamageRollMode::Average);
        assert_eq!(branches.len(), 1);
        assert!((branches[0].percentage - 1.0).abs() < 1e-12);
        assert!(branches[0].frozen);
        assert!(!branches[0]
            .instructions
            .iter()
            .any(|i| matches!(i, Instruction::Damage { .. } | Instruction::ApplyStatus { .. })));
    }

    #[test]
    fn test_accuracy_split_sums_to_one() {
        let mut s = state(PokemonConfig::new("garchomp").moves(&["stoneedge"]), PokemonConfig::new("blissey"));
        let before = s.clone();
        let branches = resolve(&mut s, "stoneedge", true);
        assert_eq!(s, before);
        assert_eq!(branches.len(), 2);
        assert!((total(&branches) - 1.0).abs() < 1e-9);
        assert!(branches[0].instructions.contains(&Instruction::DecrementPp {
            side: SideRef::User,
            move_id: "stoneedge".into(),
            amount: 1,
        }));
    }

    #[test]
    fn test_unknown_move_keeps_its_own_id() {
        let mut s = state(PokemonConfig::new("garchomp").moves(&["mysterymove"]), PokemonConfig::new("blissey"));
        let mut mutator = StateMutator::new(&mut s);
        let branches = crate::transitions::generate_instructions(
            &mut mutator,
            &Action::parse("mysterymove"),
            &Action::None,
            DamageRollMode::Average,
        );
        assert!(!branches.is_empty());
        for branch in &branches {
            assert!(branch.instructions.contains(&Instruction::DecrementPp {
                side: SideRef::User,
                move_id: "mysterymove".into(),
                amount: 1,
            }));
            assert!(branch.instructions.iter().any(|i| matches!(
                i,
                Instruction::SetLastUsedMove { side: SideRef::User, new, .. } if new.move_id == "mysterymove"
            )));
        }
    }

    #[test]
    fn test_secondary_chance_splits_hit() {
        let mut s = state(PokemonConfig::new("heatran"), PokemonConfig::new("blissey"));
        let branches = resolve(&mut s, "flamethrower", true);
        // Always hits; 10% burn
        assert_eq!(branches.len(), 2);
        let burned: f64 = branches
            .iter()
            .filter(|b| b.instructions.iter().any(|i| matches!(i, Instruction::ApplyStatus { status: Status::Burn, .. })))
            .map(|b| b.percentage)
            .sum();
        assert!((burned - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_thunder_wave_fails_on_ground_type() {
        let mut s = state(PokemonConfig::new("rotomwash"), PokemonConfig::new("garchomp"));
        let branches = resolve(&mut s, "thunderwave", true);
        assert!(!branches
            .iter()
            .any(|b| b.instructions.iter().any(|i| matches!(i, Instruction::ApplyStatus { .. }))));
    }

    #[test]
    fn test_substitute_absorbs_hit() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("blissey"));
        s.opponent.active.volatiles.insert(Volatiles::SUBSTITUTE);
        let branches = resolve(&mut s, "earthquake", true);
        assert_eq!(branches.len(), 1);
        assert!(branches[0].instructions.contains(&Instruction::RemoveVolatileStatus {
            side: SideRef::Opponent,
            volatile: Volatiles::SUBSTITUTE,
        }));
        assert!(!branches[0].instructions.iter().any(|i| matches!(i, Instruction::Damage { .. })));
    }

    #[test]
    fn test_sturdy_survives_at_one() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("skarmory").ability("sturdy"));
        s.opponent.active.max_hp = 10.0;
        s.opponent.active.hp = 10.0;
        let branches = resolve(&mut s, "firepunch", true);
        let hit = branches
            .iter()
            .find_map(|b| {
                b.instructions.iter().find_map(|i| match i {
                    Instruction::Damage { side: SideRef::Opponent, amount } => Some(*amount),
                    _ => None,
                })
            })
            .unwrap();
        assert_eq!(hit, 9.0);
    }

    #[test]
    fn test_protect_fails_when_moving_second() {
        let mut s = state(PokemonConfig::new("toxapex"), PokemonConfig::new("garchomp"));
        let branches = resolve(&mut s, "protect", false);
        assert!(!branches.iter().any(|b| b
            .instructions
            .iter()
            .any(|i| matches!(i, Instruction::ApplyVolatileStatus { volatile: Volatiles::PROTECT, .. }))));

        let branches = resolve(&mut s, "protect", true);
        assert_eq!(branches.len(), 1);
        *s.user.side_conditions.get_mut(SideCondition::Protect) = 1;
        let branches = resolve(&mut s, "protect", true);
        assert_eq!(branches.len(), 2);
        assert!((total(&branches) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_paralysis_gate() {
        let mut s = state(PokemonConfig::new("garchomp").status(Status::Paralysis), PokemonConfig::new("blissey"));
        let branches = resolve(&mut s, "earthquake", true);
        let stuck: f64 = branches.iter().filter(|b| b.frozen).map(|b| b.percentage).sum();
        assert!((stuck - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_roar_drags_each_reserve() {
        let mut s = state(PokemonConfig::new("skarmory"), PokemonConfig::new("blissey"));
        let branches = resolve(&mut s, "roar", true);
        assert_eq!(branches.len(), 2);
        for branch in &branches {
            assert!((branch.percentage - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_uturn_switches_user_out() {
        let mut s = state(PokemonConfig::new("garchomp"), PokemonConfig::new("blissey"));
        let branches = resolve(&mut s, "uturn", true);
        assert!(branches.iter().all(|b| b.instructions.iter().any(|i| matches!(
            i,
            Instruction::Switch { side: SideRef::User, .. }
        ))));
    }

    #[test]
    fn test_spikes_stack_to_three() {
        let mut s = state(PokemonConfig::new("skarmory"), PokemonConfig::new("blissey"));
        *s.opponent.side_conditions.get_mut(SideCondition::Spikes) = 3;
        let branches = resolve(&mut s, "spikes", true);
        assert!(!branches[0].instructions.iter().any(|i| matches!(i, Instruction::SideStart { .. })));
    }
}
