//! Natures and their stat modifiers.

use serde::{Deserialize, Serialize};

use crate::state::StatIndex;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    #[default]
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|n| format!("{n:?}").to_ascii_lowercase() == lower)
    }

    /// (raised, lowered), or `None` for neutral natures.
    ///
    /// The table follows the in-game grid: row = raised stat, column = lowered stat.
    pub fn modified_stats(self) -> Option<(StatIndex, StatIndex)> {
        const GRID: [StatIndex; 5] = [
            StatIndex::Attack,
            StatIndex::Defense,
            StatIndex::Speed,
            StatIndex::SpecialAttack,
            StatIndex::SpecialDefense,
        ];
        let index = self as usize;
        let (raised, lowered) = (index / 5, index % 5);
        if raised == lowered {
            None
        } else {
            Some((GRID[raised], GRID[lowered]))
        }
    }

    /// Stat modifier in tenths: 9 = -10%, 10 = neutral, 11 = +10%.
    pub fn stat_modifier(self, stat: StatIndex) -> u32 {
        match self.modified_stats() {
            Some((raised, _)) if raised == stat => 11,
            Some((_, lowered)) if lowered == stat => 9,
            _ => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nature_grid() {
        assert_eq!(
            Nature::Adamant.modified_stats(),
            Some((StatIndex::Attack, StatIndex::SpecialAttack))
        );
        assert_eq!(
            Nature::Timid.modified_stats(),
            Some((StatIndex::Speed, StatIndex::Attack))
        );
        assert_eq!(
            Nature::Modest.modified_stats(),
            Some((StatIndex::SpecialAttack, StatIndex::Attack))
        );
        assert_eq!(
            Nature::Careful.modified_stats(),
            Some((StatIndex::SpecialDefense, StatIndex::SpecialAttack))
        );
        assert_eq!(Nature::Serious.modified_stats(), None);
    }

    #[test]
    fn test_stat_modifier() {
        assert_eq!(Nature::Jolly.stat_modifier(StatIndex::Speed), 11);
        assert_eq!(Nature::Jolly.stat_modifier(StatIndex::SpecialAttack), 9);
        assert_eq!(Nature::Jolly.stat_modifier(StatIndex::Attack), 10);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Nature::from_str("Bold"), Some(Nature::Bold));
        assert_eq!(Nature::from_str("nope"), None);
    }
}
