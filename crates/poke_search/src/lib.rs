//! poke_search - Reversible battle forward-model and game-tree search
//!
//! This library models a singles Pokemon battle as a state that is edited in
//! place by reversible instructions, expands every turn into its
//! probability-weighted outcomes, and searches the resulting game tree to
//! score each pair of actions the two sides could choose.

/// Type definitions and type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Species data and lookup
pub mod species;

/// Move data and per-move hooks
pub mod moves;

/// Ability hooks
pub mod abilities;

/// Held item hooks
pub mod items;

/// Battle state
pub mod state;

/// Entity blueprints
pub mod entities;

/// Reversible state edits
pub mod instruction;

/// Applying and reversing instructions
pub mod mutator;

/// Action identifiers
pub mod action;

/// Effect modifier chain
pub mod chain;

/// Damage calculation
pub mod damage;

/// Turn expansion into weighted branches
pub mod transitions;

/// Expectiminimax search
pub mod search;

/// Choosing an action from the root payoff matrix
pub mod decision;

pub mod config;
pub mod error;

// Re-export commonly used types
pub use action::Action;
pub use config::{DamageRollMode, DecisionStrategy, SearchConfig, SolverConfig};
pub use decision::{decide, decide_with, GambitSolver, NashSolver};
pub use entities::PokemonConfig;
pub use error::{Error, Result};
pub use instruction::{Instruction, StateInstructions};
pub use mutator::StateMutator;
pub use natures::Nature;
pub use search::{evaluate, search, search_state, PayoffMatrix};
pub use species::{lookup_species, Species};
pub use state::{Pokemon, Side, SideRef, State};
pub use transitions::generate_instructions;
pub use types::{type_effectiveness, Type};
