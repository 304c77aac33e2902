//! In-place application and reversal of instructions.
//!
//! The search holds one `StateMutator` for the whole call. Applying a branch
//! and then reversing the same list restores the state exactly; the search
//! relies on this instead of cloning.

use crate::instruction::Instruction;
use crate::state::{SideRef, State};

pub struct StateMutator<'a> {
    pub state: &'a mut State,
}

impl<'a> StateMutator<'a> {
    pub fn new(state: &'a mut State) -> Self {
        Self { state }
    }

    /// Apply every instruction in order.
    pub fn apply(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            self.apply_one(instruction);
        }
    }

    /// Undo every instruction, last first.
    pub fn reverse(&mut self, instructions: &[Instruction]) {
        for instruction in instructions.iter().rev() {
            self.reverse_one(instruction);
        }
    }

    pub fn apply_one(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Switch {
                side,
                previous,
                next,
            } => self.switch(*side, previous, next),
            Instruction::Damage { side, amount } => {
                self.state.active_mut(*side).hp -= amount;
            }
            Instruction::Heal { side, amount } => {
                self.state.active_mut(*side).hp += amount;
            }
            Instruction::Boost { side, stat, amount } => {
                self.state.active_mut(*side).boosts[*stat as usize] += amount;
            }
            Instruction::ApplyStatus { side, status } => {
                self.state.active_mut(*side).status = *status;
            }
            Instruction::RemoveStatus { side, .. } => {
                self.state.active_mut(*side).status = crate::state::Status::None;
            }
            Instruction::ApplyVolatileStatus { side, volatile } => {
                self.state.active_mut(*side).volatiles.insert(*volatile);
            }
            Instruction::RemoveVolatileStatus { side, volatile } => {
                self.state.active_mut(*side).volatiles.remove(*volatile);
            }
            Instruction::SideStart {
                side,
                condition,
                amount,
            } => {
                *self.state.side_mut(*side).side_conditions.get_mut(*condition) += amount;
            }
            Instruction::SideEnd {
                side,
                condition,
                amount,
            } => {
                *self.state.side_mut(*side).side_conditions.get_mut(*condition) -= amount;
            }
            Instruction::ChangeWeather { new, .. } => self.state.weather = *new,
            Instruction::ChangeTerrain { new, .. } => self.state.terrain = *new,
            Instruction::ToggleTrickRoom => self.state.trick_room = !self.state.trick_room,
            Instruction::DisableMove { side, move_id } => self.set_disabled(*side, move_id, true),
            Instruction::EnableMove { side, move_id } => self.set_disabled(*side, move_id, false),
            Instruction::DecrementPp {
                side,
                move_id,
                amount,
            } => {
                if let Some(m) = self.find_move(*side, move_id) {
                    m.pp -= amount;
                }
            }
            Instruction::ChangeType { side, new, .. } => {
                self.state.active_mut(*side).types = new.clone();
            }
            Instruction::ChangeItem { side, new, .. } => {
                self.state.active_mut(*side).item = new.clone();
            }
            Instruction::SetWish { side, new, .. } => self.state.side_mut(*side).wish = *new,
            Instruction::SetFutureSight { side, new, .. } => {
                self.state.side_mut(*side).future_sight = new.clone();
            }
            Instruction::SetLastUsedMove { side, new, .. } => {
                self.state.side_mut(*side).last_used_move = new.clone();
            }
        }
    }

    pub fn reverse_one(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Switch {
                side,
                previous,
                next,
            } => self.switch(*side, next, previous),
            Instruction::Damage { side, amount } => {
                self.state.active_mut(*side).hp += amount;
            }
            Instruction::Heal { side, amount } => {
                self.state.active_mut(*side).hp -= amount;
            }
            Instruction::Boost { side, stat, amount } => {
                self.state.active_mut(*side).boosts[*stat as usize] -= amount;
            }
            Instruction::ApplyStatus { side, .. } => {
                self.state.active_mut(*side).status = crate::state::Status::None;
            }
            Instruction::RemoveStatus { side, status } => {
                self.state.active_mut(*side).status = *status;
            }
            Instruction::ApplyVolatileStatus { side, volatile } => {
                self.state.active_mut(*side).volatiles.remove(*volatile);
            }
            Instruction::RemoveVolatileStatus { side, volatile } => {
                self.state.active_mut(*side).volatiles.insert(*volatile);
            }
            Instruction::SideStart {
                side,
                condition,
                amount,
            } => {
                *self.state.side_mut(*side).side_conditions.get_mut(*condition) -= amount;
            }
            Instruction::SideEnd {
                side,
                condition,
                amount,
            } => {
                *self.state.side_mut(*side).side_conditions.get_mut(*condition) += amount;
            }
            Instruction::ChangeWeather { previous, .. } => self.state.weather = *previous,
            Instruction::ChangeTerrain { previous, .. } => self.state.terrain = *previous,
            Instruction::ToggleTrickRoom => self.state.trick_room = !self.state.trick_room,
            Instruction::DisableMove { side, move_id } => self.set_disabled(*side, move_id, false),
            Instruction::EnableMove { side, move_id } => self.set_disabled(*side, move_id, true),
            Instruction::DecrementPp {
                side,
                move_id,
                amount,
            } => {
                if let Some(m) = self.find_move(*side, move_id) {
                    m.pp += amount;
                }
            }
            Instruction::ChangeType { side, previous, .. } => {
                self.state.active_mut(*side).types = previous.clone();
            }
            Instruction::ChangeItem { side, previous, .. } => {
                self.state.active_mut(*side).item = previous.clone();
            }
            Instruction::SetWish { side, previous, .. } => {
                self.state.side_mut(*side).wish = *previous;
            }
            Instruction::SetFutureSight { side, previous, .. } => {
                self.state.side_mut(*side).future_sight = previous.clone();
            }
            Instruction::SetLastUsedMove { side, previous, .. } => {
                self.state.side_mut(*side).last_used_move = previous.clone();
            }
        }
    }

    /// Make reserve member `incoming` active and bench `outgoing`.
    ///
    /// Panics if `outgoing` is not the active Pokémon or `incoming` is not in
    /// the reserve; generators only emit switches to existing members.
    fn switch(&mut self, side: SideRef, outgoing: &str, incoming: &str) {
        let side = self.state.side_mut(side);
        assert_eq!(
            side.active.id, outgoing,
            "switch expected {outgoing} to be active"
        );
        let next = side
            .reserve
            .remove(incoming)
            .unwrap_or_else(|| panic!("switch target {incoming} is not in the reserve"));
        let previous = std::mem::replace(&mut side.active, next);
        side.reserve.insert(previous.id.clone(), previous);
    }

    fn find_move(&mut self, side: SideRef, move_id: &str) -> Option<&mut crate::state::PokemonMove> {
        self.state
            .active_mut(side)
            .moves
            .iter_mut()
            .find(|m| m.id == move_id)
    }

    fn set_disabled(&mut self, side: SideRef, move_id: &str, disabled: bool) {
        if let Some(m) = self.find_move(side, move_id) {
            m.disabled = disabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::state::{Side, SideCondition, Stat, Status, Volatiles, Weather};

    fn sample_state() -> State {
        let user = Side::new(
            PokemonConfig::new("garchomp").moves(&["earthquake", "dragonclaw"]).build().unwrap(),
            [PokemonConfig::new("ferrothorn").build().unwrap()],
        );
        let opponent = Side::new(PokemonConfig::new("tyranitar").build().unwrap(), []);
        State::new(user, opponent)
    }

    #[test]
    fn test_apply_then_reverse_restores_state() {
        let mut state = sample_state();
        let original = state.clone();
        let instructions = vec![
            Instruction::Damage {
                side: SideRef::Opponent,
                amount: 50.0,
            },
            Instruction::Boost {
                side: SideRef::User,
                stat: Stat::Attack,
                amount: 2,
            },
            Instruction::ApplyStatus {
                side: SideRef::Opponent,
                status: Status::Burn,
            },
            Instruction::ApplyVolatileStatus {
                side: SideRef::User,
                volatile: Volatiles::SUBSTITUTE,
            },
            Instruction::SideStart {
                side: SideRef::Opponent,
                condition: SideCondition::Spikes,
                amount: 1,
            },
            Instruction::ChangeWeather {
                new: Some(Weather::Sand),
                previous: None,
            },
            Instruction::DecrementPp {
                side: SideRef::User,
                move_id: "earthquake".into(),
                amount: 1,
            },
            Instruction::Switch {
                side: SideRef::User,
                previous: "garchomp".into(),
                next: "ferrothorn".into(),
            },
            Instruction::Damage {
                side: SideRef::User,
                amount: 10.0,
            },
        ];

        let mut mutator = StateMutator::new(&mut state);
        mutator.apply(&instructions);
        assert_eq!(mutator.state.user.active.id, "ferrothorn");
        assert_eq!(mutator.state.weather, Some(Weather::Sand));
        assert!(mutator.state.user.reserve["garchomp"].boosts[Stat::Attack as usize] == 2);

        mutator.reverse(&instructions);
        assert_eq!(state, original);
    }

    #[test]
    fn test_switch_swaps_active_and_reserve() {
        let mut state = sample_state();
        let mut mutator = StateMutator::new(&mut state);
        mutator.apply_one(&Instruction::Switch {
            side: SideRef::User,
            previous: "garchomp".into(),
            next: "ferrothorn".into(),
        });
        assert_eq!(state.user.active.id, "ferrothorn");
        assert!(state.user.reserve.contains_key("garchomp"));
        assert!(!state.user.reserve.contains_key("ferrothorn"));
    }

    #[test]
    #[should_panic(expected = "not in the reserve")]
    fn test_switch_to_unknown_target_panics() {
        let mut state = sample_state();
        let mut mutator = StateMutator::new(&mut state);
        mutator.apply_one(&Instruction::Switch {
            side: SideRef::User,
            previous: "garchomp".into(),
            next: "missingno".into(),
        });
    }
}
