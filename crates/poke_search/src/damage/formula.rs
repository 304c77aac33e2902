//! Core damage formula and math utilities.
//!
//! Intermediate results are truncated the way the games truncate them; the
//! roll multipliers are applied in integer thousandths so a roll never lands
//! a hair below an integer.

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense / 50) + 2`
///
/// # Arguments
/// * `level` - Attacker's level (1-100)
/// * `base_power` - Move's base power after the modifier chain
/// * `attack` - Effective attack stat (after boosts)
/// * `defense` - Effective defense stat (after boosts)
pub fn get_base_damage(level: u8, base_power: f64, attack: f64, defense: f64) -> f64 {
    // Avoid division by zero
    if defense <= 0.0 {
        return 0.0;
    }

    let level_factor = (2 * level as u32 / 5 + 2) as f64;
    (level_factor * base_power * attack / defense / 50.0).floor() + 2.0
}

/// Apply a random roll expressed in thousandths (850..=1000).
#[inline]
pub fn apply_roll(base_damage: f64, roll: u32) -> f64 {
    (base_damage as u64 * roll as u64 / 1000) as f64
}

/// Boost multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
/// Each entry is (numerator, denominator).
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 2/8 = 0.25x
    (2, 7), // -5: 2/7 ≈ 0.286x
    (2, 6), // -4: 2/6 ≈ 0.333x
    (2, 5), // -3: 2/5 = 0.4x
    (2, 4), // -2: 2/4 = 0.5x
    (2, 3), // -1: 2/3 ≈ 0.667x
    (2, 2), //  0: 2/2 = 1.0x
    (3, 2), // +1: 3/2 = 1.5x
    (4, 2), // +2: 4/2 = 2.0x
    (5, 2), // +3: 5/2 = 2.5x
    (6, 2), // +4: 6/2 = 3.0x
    (7, 2), // +5: 7/2 = 3.5x
    (8, 2), // +6: 8/2 = 4.0x
];

/// Apply stat boost stage to a raw stat, truncating.
pub fn apply_boost(base_stat: u16, stage: i8) -> u32 {
    let stage = stage.clamp(-6, 6);
    let index = (stage + 6) as usize;
    let (num, den) = BOOST_TABLE[index];

    base_stat as u32 * num / den
}

/// Accuracy/Evasion boost table (different from stat boosts).
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
const ACC_EVA_TABLE: [(u32, u32); 13] = [
    (3, 9), // -6: 33%
    (3, 8), // -5: 38%
    (3, 7), // -4: 43%
    (3, 6), // -3: 50%
    (3, 5), // -2: 60%
    (3, 4), // -1: 75%
    (3, 3), //  0: 100%
    (4, 3), // +1: 133%
    (5, 3), // +2: 167%
    (6, 3), // +3: 200%
    (7, 3), // +4: 233%
    (8, 3), // +5: 267%
    (9, 3), // +6: 300%
];

/// Hit probability for a move with `accuracy` percent, given the combined
/// accuracy-minus-evasion stage. Clamped to `[0, 1]`.
pub fn hit_chance(accuracy: f64, stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6);
    let (num, den) = ACC_EVA_TABLE[(stage + 6) as usize];
    (accuracy / 100.0 * num as f64 / den as f64).clamp(0.0, 1.0)
}
