//! Move-aware type effectiveness.
//!
//! Wraps the raw chart with the handful of moves and abilities that bend it.

use crate::moves::Move;
use crate::state::{Pokemon, Volatiles};
use crate::types::{single_type_effectiveness, Type};

/// Effectiveness of `mv` used by `attacker` against `defender`.
pub fn move_effectiveness(mv: &Move, attacker: &Pokemon, defender: &Pokemon) -> f64 {
    let mut multiplier = 1.0;
    let ignores_ghost_immunity = matches!(mv.move_type, Type::Normal | Type::Fighting)
        && (attacker.has_ability("scrappy") || attacker.has_ability("mindseye"));

    for (i, &defending) in defender.types.iter().enumerate() {
        if defender.types[..i].contains(&defending) {
            continue;
        }
        let mut m = single_type_effectiveness(mv.move_type, defending);

        // Freeze-Dry: always super effective on Water
        if mv.id == "freezedry" && defending == Type::Water {
            m = 2.0;
        }
        if m == 0.0 && defending == Type::Ghost && ignores_ghost_immunity {
            m = 1.0;
        }
        // Iron Ball grounds Flying types
        if m == 0.0 && defending == Type::Flying && mv.move_type == Type::Ground && defender.has_item("ironball") {
            m = 1.0;
        }
        multiplier *= m;
    }

    if mv.move_type == Type::Ground && defender.volatiles.contains(Volatiles::MAGNET_RISE) {
        return 0.0;
    }
    multiplier
}
