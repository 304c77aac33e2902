//! Ability system hooks and registry.
//!
//! Abilities are looked up by normalized name. Names with no entry (unknown,
//! unrevealed, or simply without a modeled effect) resolve to no hooks.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::AbilityHooks;
pub use registry::ABILITY_REGISTRY;

/// Hooks for `ability`, if it has any.
#[inline]
pub fn ability_hooks(ability: &str) -> Option<&'static AbilityHooks> {
    ABILITY_REGISTRY.get(ability)
}

/// Abilities that stop the holder's stats from being lowered by the opponent.
pub const STAT_DROP_IMMUNE: [&str; 4] = ["clearbody", "whitesmoke", "fullmetalbody", "mirrorarmor"];

#[cfg(test)]
mod tests;
