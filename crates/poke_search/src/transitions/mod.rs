//! Transition generator.
//!
//! Given a state and one action per side, enumerate every probabilistic
//! outcome of the turn as a list of [`StateInstructions`]. The generator
//! only ever reads the state: when a stage needs to see the effect of the
//! instructions produced so far, it applies them, reads, and reverses them
//! again before returning.
//!
//! A turn resolves as:
//! 1. Ordering: switches first, then priority, then speed (Trick Room
//!    inverts speed). Exact ties resolve both orders at 50% each.
//! 2. Each side's action, first mover then second mover.
//! 3. End of turn, when both sides chose a real action.
//! 4. Identical branches are merged.

pub mod boosts;
mod end_of_turn;
pub mod ordering;
mod resolve;
pub mod status;
pub mod switch;

use tracing::trace;

use crate::action::Action;
use crate::config::DamageRollMode;
use crate::instruction::{Instruction, StateInstructions};
use crate::mutator::StateMutator;
use crate::state::{SideRef, State};

pub use ordering::{effective_speed, move_order, MoveOrder};
pub use resolve::generate_move_instructions;
pub use switch::best_switch;

/// Facts about the turn fixed before either action resolves.
#[derive(Clone, Debug)]
pub struct TurnContext {
    pub user_action: Action,
    pub opponent_action: Action,
    /// Active Pokémon ids at the start of the turn. A side whose active has
    /// changed since (dragged out, or switched by its own move) skips its move.
    pub starting_active: [String; 2],
    pub mode: DamageRollMode,
}

impl TurnContext {
    pub fn new(state: &State, user_action: Action, opponent_action: Action, mode: DamageRollMode) -> Self {
        Self {
            user_action,
            opponent_action,
            starting_active: [state.user.active.id.clone(), state.opponent.active.id.clone()],
            mode,
        }
    }

    pub fn action(&self, side: SideRef) -> &Action {
        match side {
            SideRef::User => &self.user_action,
            SideRef::Opponent => &self.opponent_action,
        }
    }

    pub fn starting_active(&self, side: SideRef) -> &str {
        match side {
            SideRef::User => &self.starting_active[0],
            SideRef::Opponent => &self.starting_active[1],
        }
    }
}

/// Every outcome of the turn where the sides choose these actions.
///
/// Branch probabilities sum to 1. The state is left exactly as it was found.
pub fn generate_instructions(
    mutator: &mut StateMutator,
    user_action: &Action,
    opponent_action: &Action,
    mode: DamageRollMode,
) -> Vec<StateInstructions> {
    let turn = TurnContext::new(mutator.state, user_action.clone(), opponent_action.clone(), mode);

    let orders: Vec<(f64, SideRef)> = match move_order(mutator.state, user_action, opponent_action) {
        MoveOrder::First(side) => vec![(1.0, side)],
        MoveOrder::SpeedTie => vec![(0.5, SideRef::User), (0.5, SideRef::Opponent)],
    };

    let mut all = Vec::new();
    for (chance, first) in orders {
        let mut branches = vec![StateInstructions::new(chance, Vec::new())];

        branches = resolve::resolve_action(mutator, &turn, first, true, branches);
        unfreeze(&mut branches);
        branches = resolve::resolve_action(mutator, &turn, first.opposite(), false, branches);
        unfreeze(&mut branches);

        let both_acted = *user_action != Action::None && *opponent_action != Action::None;
        if both_acted {
            branches = expand(mutator, branches, |m| vec![Outcome::certain(end_of_turn::end_of_turn(m))]);
        }
        all.extend(branches);
    }

    let merged = merge(all);
    trace!(user = %user_action, opponent = %opponent_action, branches = merged.len(), "generated turn");
    merged
}

fn unfreeze(branches: &mut [StateInstructions]) {
    for branch in branches {
        branch.frozen = false;
    }
}

/// Combine branches with identical instruction lists.
fn merge(branches: Vec<StateInstructions>) -> Vec<StateInstructions> {
    let mut merged: Vec<StateInstructions> = Vec::with_capacity(branches.len());
    for branch in branches {
        match merged.iter_mut().find(|m| m.instructions == branch.instructions) {
            Some(existing) => existing.percentage += branch.percentage,
            None => merged.push(branch),
        }
    }
    merged
}

// ============================================================================
// Stage plumbing
// ============================================================================

/// One alternative produced by a stage, relative to the branch it extends.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Outcome {
    pub chance: f64,
    pub instructions: Vec<Instruction>,
    pub frozen: bool,
}

impl Outcome {
    pub fn new(chance: f64, instructions: Vec<Instruction>) -> Self {
        Self {
            chance,
            instructions,
            frozen: false,
        }
    }

    pub fn certain(instructions: Vec<Instruction>) -> Self {
        Self::new(1.0, instructions)
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }
}

/// Run `stage` on every live branch with the branch applied, and attach the
/// outcomes it returns. Frozen branches pass through untouched.
pub(crate) fn expand<F>(
    mutator: &mut StateMutator,
    branches: Vec<StateInstructions>,
    mut stage: F,
) -> Vec<StateInstructions>
where
    F: FnMut(&mut StateMutator) -> Vec<Outcome>,
{
    let mut out = Vec::with_capacity(branches.len());
    for branch in branches {
        if branch.frozen {
            out.push(branch);
            continue;
        }

        mutator.apply(&branch.instructions);
        let outcomes = stage(mutator);
        mutator.reverse(&branch.instructions);

        for outcome in dedup(outcomes) {
            if outcome.chance <= 0.0 {
                continue;
            }
            let mut child = branch.split(outcome.chance);
            child.instructions.extend(outcome.instructions);
            child.frozen |= outcome.frozen;
            out.push(child);
        }
    }
    out
}

fn dedup(outcomes: Vec<Outcome>) -> Vec<Outcome> {
    let mut merged: Vec<Outcome> = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match merged
            .iter_mut()
            .find(|m| m.frozen == outcome.frozen && m.instructions == outcome.instructions)
        {
            Some(existing) => existing.chance += outcome.chance,
            None => merged.push(outcome),
        }
    }
    merged
}

/// Instructions built up one at a time, each applied as soon as it is
/// pushed so later reads see it. `finish` reverses them all.
pub(crate) struct Frame<'m, 'a> {
    mutator: &'m mut StateMutator<'a>,
    instructions: Vec<Instruction>,
}

impl<'m, 'a> Frame<'m, 'a> {
    pub fn new(mutator: &'m mut StateMutator<'a>) -> Self {
        Self {
            mutator,
            instructions: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &State {
        self.mutator.state
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.mutator.apply_one(&instruction);
        self.instructions.push(instruction);
    }

    pub fn push_all(&mut self, instructions: impl IntoIterator<Item = Instruction>) {
        for instruction in instructions {
            self.push(instruction);
        }
    }

    pub fn finish(self) -> Vec<Instruction> {
        let Frame {
            mutator,
            instructions,
        } = self;
        mutator.reverse(&instructions);
        instructions
    }
}
