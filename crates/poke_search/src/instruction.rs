//! Reversible state changes.
//!
//! Every `Instruction` carries enough data to be undone exactly: changes that
//! overwrite a value record the previous one. A list of instructions applied
//! in order is undone by reversing each one in reverse order.

use serde::Serialize;

use crate::state::{
    round_hp, FutureSight, LastUsedMove, Pokemon, SideCondition, SideRef, Stat, Status, Terrain, Volatiles,
    Weather, Wish,
};
use crate::types::Type;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// Swap the active Pokémon `previous` with reserve member `next`.
    Switch {
        side: SideRef,
        previous: String,
        next: String,
    },
    Damage {
        side: SideRef,
        amount: f64,
    },
    Heal {
        side: SideRef,
        amount: f64,
    },
    /// Add `amount` stages. Generators emit the clamped delta, so reversal is exact.
    Boost {
        side: SideRef,
        stat: Stat,
        amount: i8,
    },
    /// Set status on a Pokémon that currently has none.
    ApplyStatus {
        side: SideRef,
        status: Status,
    },
    /// Clear `status`, which the Pokémon must currently have.
    RemoveStatus {
        side: SideRef,
        status: Status,
    },
    /// Add flags that are not yet present.
    ApplyVolatileStatus {
        side: SideRef,
        volatile: Volatiles,
    },
    /// Remove flags that are all present.
    RemoveVolatileStatus {
        side: SideRef,
        volatile: Volatiles,
    },
    SideStart {
        side: SideRef,
        condition: SideCondition,
        amount: u8,
    },
    SideEnd {
        side: SideRef,
        condition: SideCondition,
        amount: u8,
    },
    ChangeWeather {
        new: Option<Weather>,
        previous: Option<Weather>,
    },
    ChangeTerrain {
        new: Option<Terrain>,
        previous: Option<Terrain>,
    },
    ToggleTrickRoom,
    DisableMove {
        side: SideRef,
        move_id: String,
    },
    EnableMove {
        side: SideRef,
        move_id: String,
    },
    DecrementPp {
        side: SideRef,
        move_id: String,
        amount: u8,
    },
    ChangeType {
        side: SideRef,
        new: Vec<Type>,
        previous: Vec<Type>,
    },
    ChangeItem {
        side: SideRef,
        new: String,
        previous: String,
    },
    SetWish {
        side: SideRef,
        new: Wish,
        previous: Wish,
    },
    SetFutureSight {
        side: SideRef,
        new: FutureSight,
        previous: FutureSight,
    },
    SetLastUsedMove {
        side: SideRef,
        new: LastUsedMove,
        previous: LastUsedMove,
    },
}

impl Instruction {
    /// Damage `pokemon` (the active on `side`) by `amount`, never past 0 HP.
    /// Returns `None` when nothing would change.
    pub fn damage(side: SideRef, pokemon: &Pokemon, amount: f64) -> Option<Instruction> {
        let amount = round_hp(amount).min(pokemon.hp);
        (amount > 0.0).then_some(Instruction::Damage { side, amount })
    }

    /// Heal `pokemon` by `amount`, never past max HP.
    pub fn heal(side: SideRef, pokemon: &Pokemon, amount: f64) -> Option<Instruction> {
        if !pokemon.is_alive() {
            return None;
        }
        let amount = round_hp(amount).min(pokemon.max_hp - pokemon.hp);
        (amount > 0.0).then_some(Instruction::Heal { side, amount })
    }

    /// Damage by a fraction of max HP (residuals, hazards), at least 1.
    pub fn damage_fraction(side: SideRef, pokemon: &Pokemon, fraction: f64) -> Option<Instruction> {
        Self::damage(side, pokemon, hp_fraction(pokemon, fraction))
    }

    /// Heal by a fraction of max HP, at least 1.
    pub fn heal_fraction(side: SideRef, pokemon: &Pokemon, fraction: f64) -> Option<Instruction> {
        Self::heal(side, pokemon, hp_fraction(pokemon, fraction))
    }
}

/// `fraction` of max HP, truncated to a whole number and at least 1.
///
/// HP amounts are kept integral so that applying and reversing them is exact.
#[inline]
pub fn hp_fraction(pokemon: &Pokemon, fraction: f64) -> f64 {
    (pokemon.max_hp * fraction).floor().max(1.0)
}

/// One probabilistic outcome of a turn: the instructions that produce it and
/// the probability of reaching it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateInstructions {
    pub percentage: f64,
    pub instructions: Vec<Instruction>,
    /// Set when the current move can do nothing further in this branch
    /// (it missed, the user fainted, or it was blocked).
    pub frozen: bool,
}

impl Default for StateInstructions {
    fn default() -> Self {
        Self {
            percentage: 1.0,
            instructions: Vec::new(),
            frozen: false,
        }
    }
}

impl StateInstructions {
    pub fn new(percentage: f64, instructions: Vec<Instruction>) -> Self {
        Self {
            percentage,
            instructions,
            frozen: false,
        }
    }

    /// Copy of this branch taken with probability `chance`.
    pub fn split(&self, chance: f64) -> Self {
        Self {
            percentage: self.percentage * chance,
            instructions: self.instructions.clone(),
            frozen: self.frozen,
        }
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scales_percentage() {
        let branch = StateInstructions::new(0.5, vec![Instruction::ToggleTrickRoom]);
        let child = branch.split(0.3);
        assert!((child.percentage - 0.15).abs() < 1e-12);
        assert_eq!(child.instructions, branch.instructions);
    }

    #[test]
    fn test_fractions_are_whole_and_clamped() {
        let mut pokemon = crate::entities::PokemonConfig::new("garchomp").build().unwrap();
        // 357 / 16 = 22.3
        assert_eq!(
            Instruction::damage_fraction(SideRef::User, &pokemon, 1.0 / 16.0),
            Some(Instruction::Damage { side: SideRef::User, amount: 22.0 })
        );
        assert_eq!(Instruction::heal_fraction(SideRef::User, &pokemon, 0.5), None);

        pokemon.hp = 10.0;
        assert_eq!(
            Instruction::damage_fraction(SideRef::User, &pokemon, 0.25),
            Some(Instruction::Damage { side: SideRef::User, amount: 10.0 })
        );
        pokemon.hp = 0.0;
        assert_eq!(Instruction::damage_fraction(SideRef::User, &pokemon, 0.25), None);
    }

    #[test]
    fn test_fractional_amounts_round_to_hp_grid() {
        use crate::state::HP_STEP;

        let mut pokemon = crate::entities::PokemonConfig::new("garchomp")
            .current_hp(123.37)
            .build()
            .unwrap();
        let start = pokemon.hp;
        assert_eq!(start % HP_STEP, 0.0);

        let Some(Instruction::Heal { amount, .. }) = Instruction::heal(SideRef::User, &pokemon, 1000.0) else {
            panic!("expected a heal");
        };
        pokemon.hp += amount;
        assert_eq!(pokemon.hp, pokemon.max_hp);
        pokemon.hp -= amount;
        assert_eq!(pokemon.hp.to_bits(), start.to_bits());

        let Some(Instruction::Damage { amount, .. }) = Instruction::damage(SideRef::User, &pokemon, 0.1) else {
            panic!("expected damage");
        };
        assert_eq!(amount % HP_STEP, 0.0);
    }
}
