//! Move hook type definitions.
//!
//! Move hooks are the first link of the modifier chain. Simple conditional
//! power boosts (Knock Off, Venoshock) use a condition plus a multiplier;
//! anything else rewrites the move outright.

use crate::chain::MoveContext;
use crate::moves::Move;

// ============================================================================
// Move Hook Type Definitions
// ============================================================================

/// Returns true if the conditional multiplier applies (e.g. target holds an item for Knock Off).
pub type OnBasePowerCondition = fn(move_data: &Move, ctx: &MoveContext) -> bool;

/// Rewrites the move: variable power, type changes, contextual failure.
pub type OnModifyMove = fn(move_data: &Move, ctx: &MoveContext) -> Move;

// ============================================================================
// MoveHooks Struct
// ============================================================================

/// Hook table for moves with conditional effects.
#[derive(Clone, Copy)]
pub struct MoveHooks {
    /// Condition check for simple multiplier boosts
    pub on_base_power_condition: Option<OnBasePowerCondition>,

    /// Multiplier applied to base power when the condition holds
    pub conditional_multiplier: f64,

    /// Custom rewrite, runs after the conditional multiplier
    pub on_modify_move: Option<OnModifyMove>,
}

impl MoveHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_base_power_condition: None,
        conditional_multiplier: 1.0,
        on_modify_move: None,
    };
}
