//! Modifier chain.
//!
//! Before a move resolves it is rewritten by up to five hooks, in order:
//! the move's own hook, the defender's ability, the attacker's ability, the
//! attacker's item, then the defender's item. Each stage takes the move the
//! previous stage produced and returns a new copy; nothing is mutated.

use crate::abilities::ability_hooks;
use crate::items::item_hooks;
use crate::moves::{Move, MoveHooks, MOVE_REGISTRY};
use crate::state::{Pokemon, Side, SideRef, State, Terrain, Weather};
use crate::types::type_effectiveness;

/// Abilities that ignore the defender's ability while attacking.
const MOLD_BREAKERS: [&str; 3] = ["moldbreaker", "teravolt", "turboblaze"];

/// Read-only view of the battle handed to every chain hook.
#[derive(Clone, Copy)]
pub struct MoveContext<'a> {
    pub attacker: &'a Pokemon,
    pub defender: &'a Pokemon,
    pub attacker_side: &'a Side,
    pub defender_side: &'a Side,
    /// The opponent's choice this turn when it is a move; `None` for switches.
    pub defending_move: Option<&'a Move>,
    /// Whether the attacker moves before the defender this turn.
    pub first_move: bool,
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
}

impl<'a> MoveContext<'a> {
    pub fn new(
        state: &'a State,
        attacker: SideRef,
        defending_move: Option<&'a Move>,
        first_move: bool,
    ) -> Self {
        let attacker_side = state.side(attacker);
        let defender_side = state.side(attacker.opposite());
        Self {
            attacker: &attacker_side.active,
            defender: &defender_side.active,
            attacker_side,
            defender_side,
            defending_move,
            first_move,
            weather: state.effective_weather(),
            terrain: state.terrain,
        }
    }

    /// Type effectiveness of `mv` against the defender.
    #[inline]
    pub fn effectiveness(&self, mv: &Move) -> f64 {
        type_effectiveness(mv.move_type, &self.defender.types)
    }

    #[inline]
    pub fn is_stab(&self, mv: &Move) -> bool {
        self.attacker.has_type(mv.move_type)
    }
}

/// Run `mv` through the full chain.
pub fn modify_move(mv: &Move, ctx: &MoveContext) -> Move {
    let mut modified = *mv;

    if let Some(hooks) = MOVE_REGISTRY.get(modified.id) {
        modified = apply_move_hooks(hooks, &modified, ctx);
    }

    let ignores_defender_ability = MOLD_BREAKERS.contains(&ctx.attacker.ability.as_str());
    if !ignores_defender_ability {
        if let Some(hook) = ability_hooks(&ctx.defender.ability).and_then(|h| h.on_modify_attack_against) {
            modified = hook(&modified, ctx);
        }
    }

    if let Some(hook) = ability_hooks(&ctx.attacker.ability).and_then(|h| h.on_modify_attack_being_used) {
        modified = hook(&modified, ctx);
    }

    if let Some(hook) = item_hooks(&ctx.attacker.item).and_then(|h| h.on_modify_attack_being_used) {
        modified = hook(&modified, ctx);
    }

    if let Some(hook) = item_hooks(&ctx.defender.item).and_then(|h| h.on_modify_attack_against) {
        modified = hook(&modified, ctx);
    }

    modified
}

fn apply_move_hooks(hooks: &MoveHooks, mv: &Move, ctx: &MoveContext) -> Move {
    let mut modified = *mv;
    if let Some(condition) = hooks.on_base_power_condition {
        if condition(&modified, ctx) {
            modified.base_power *= hooks.conditional_multiplier;
        }
    }
    if let Some(hook) = hooks.on_modify_move {
        modified = hook(&modified, ctx);
    }
    modified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::moves::lookup_move;

    fn state(user: Pokemon, opponent: Pokemon) -> State {
        State::new(Side::new(user, []), Side::new(opponent, []))
    }

    #[test]
    fn test_levitate_blocks_ground_moves() {
        let s = state(
            PokemonConfig::new("garchomp").moves(&["earthquake"]).build().unwrap(),
            PokemonConfig::new("gengar").ability("levitate").build().unwrap(),
        );
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = modify_move(lookup_move("earthquake"), &ctx);
        assert!(!modified.has_effect());
    }

    #[test]
    fn test_mold_breaker_ignores_levitate() {
        let s = state(
            PokemonConfig::new("excadrill").ability("moldbreaker").build().unwrap(),
            PokemonConfig::new("gengar").ability("levitate").build().unwrap(),
        );
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = modify_move(lookup_move("earthquake"), &ctx);
        assert_eq!(modified.base_power, 100.0);
    }

    #[test]
    fn test_chain_order_attacker_ability_then_item() {
        // Technician sees the base 40 power, Life Orb scales the result.
        let s = state(
            PokemonConfig::new("scizor").ability("technician").item("lifeorb").build().unwrap(),
            PokemonConfig::new("blissey").build().unwrap(),
        );
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = modify_move(lookup_move("bulletpunch"), &ctx);
        assert!((modified.base_power - 40.0 * 1.5 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_defender_ability_runs_before_attacker_ability() {
        // Thick Fat halves Fire Punch to 37.5, which Technician then boosts.
        let s = state(
            PokemonConfig::new("scizor").ability("technician").build().unwrap(),
            PokemonConfig::new("snorlax").ability("thickfat").build().unwrap(),
        );
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = modify_move(lookup_move("firepunch"), &ctx);
        assert!((modified.base_power - 75.0 * 0.5 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_move_hook_runs_first() {
        // Knock Off's 1.5x happens before Technician checks the power threshold.
        let s = state(
            PokemonConfig::new("scizor").ability("technician").build().unwrap(),
            PokemonConfig::new("blissey").item("leftovers").build().unwrap(),
        );
        let ctx = MoveContext::new(&s, SideRef::User, None, true);
        let modified = modify_move(lookup_move("knockoff"), &ctx);
        assert!((modified.base_power - 97.5).abs() < 1e-9);
    }
}
