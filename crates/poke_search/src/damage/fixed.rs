use crate::damage::effectiveness::move_effectiveness;
use crate::moves::{FixedDamage, Move};
use crate::state::Pokemon;

/// Damage for moves that bypass the formula.
///
/// Returns `None` for ordinary moves. Type immunities still apply: Night Shade
/// does nothing to a Normal type.
pub fn get_fixed_damage(mv: &Move, attacker: &Pokemon, defender: &Pokemon) -> Option<f64> {
    let kind = mv.fixed_damage?;
    if move_effectiveness(mv, attacker, defender) == 0.0 {
        return Some(0.0);
    }

    let damage = match kind {
        FixedDamage::Level => attacker.level as f64,
        FixedDamage::Constant(amount) => amount,
        // Super Fang: half of current HP, at least 1
        FixedDamage::HalfTargetHp => (defender.hp / 2.0).floor().max(1.0),
        FixedDamage::TargetHpMinusUserHp => (defender.hp - attacker.hp).max(0.0),
        FixedDamage::UserHp => attacker.hp,
    };
    Some(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::moves::lookup_move;

    #[test]
    fn test_level_damage() {
        let chansey = PokemonConfig::new("chansey").level(88).build().unwrap();
        let target = PokemonConfig::new("garchomp").build().unwrap();
        assert_eq!(get_fixed_damage(lookup_move("seismictoss"), &chansey, &target), Some(88.0));
    }

    #[test]
    fn test_immunity_still_applies() {
        let gengar = PokemonConfig::new("gengar").build().unwrap();
        let blissey = PokemonConfig::new("blissey").build().unwrap();
        assert_eq!(get_fixed_damage(lookup_move("nightshade"), &gengar, &blissey), Some(0.0));
    }

    #[test]
    fn test_super_fang_halves_current_hp() {
        let attacker = PokemonConfig::new("pikachu").build().unwrap();
        let target = PokemonConfig::new("snorlax").current_hp(101.0).build().unwrap();
        assert_eq!(get_fixed_damage(lookup_move("superfang"), &attacker, &target), Some(50.0));
    }

    #[test]
    fn test_endeavor() {
        let attacker = PokemonConfig::new("pikachu").current_hp(1.0).build().unwrap();
        let target = PokemonConfig::new("snorlax").build().unwrap();
        assert_eq!(
            get_fixed_damage(lookup_move("endeavor"), &attacker, &target),
            Some(target.hp - 1.0)
        );
    }

    #[test]
    fn test_ordinary_move_is_none() {
        let a = PokemonConfig::new("pikachu").build().unwrap();
        assert_eq!(get_fixed_damage(lookup_move("thunderbolt"), &a, &a), None);
    }
}
