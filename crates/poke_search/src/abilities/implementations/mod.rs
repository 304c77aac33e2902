pub mod against;
pub mod attacker;
pub mod priority;
pub mod residual;
pub mod speed;
pub mod stat_modifiers;
pub mod switch;

use crate::moves::Move;

/// Copy of `mv` with its base power scaled.
#[inline]
pub(crate) fn scale_power(mv: &Move, factor: f64) -> Move {
    Move {
        base_power: mv.base_power * factor,
        ..*mv
    }
}
