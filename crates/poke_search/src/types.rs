//! Type definitions and the type chart.
//!
//! The chart is stored as a dense `[attacker][defender]` matrix so lookups in
//! the damage calculator and the evaluator are a pair of array indexes.

use serde::{Deserialize, Serialize};

/// Number of real types (excludes `Typeless`).
pub const TYPE_COUNT: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
    /// Struggle, and Pokémon that lost every type (Burn Up, Roost on pure Flying).
    Typeless = 255,
}

impl Default for Type {
    fn default() -> Self {
        Type::Normal
    }
}

impl Type {
    /// All real types, in chart order.
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Look up a type by name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .or_else(|| (lower == "typeless" || lower == "???").then_some(Type::Typeless))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
            Type::Typeless => "typeless",
        }
    }
}

// Shorthand for the chart literal below.
const X: f64 = 1.0;
const S: f64 = 2.0;
const R: f64 = 0.5;
const I: f64 = 0.0;

/// Effectiveness chart indexed `[attacking][defending]`.
///
/// Column order matches `Type::ALL`:
/// Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
pub static TYPE_CHART: [[f64; TYPE_COUNT]; TYPE_COUNT] = [
    /* Normal   */ [X, X, X, X, X, X, X, X, X, X, X, X, R, I, X, X, R, X],
    /* Fire     */ [X, R, R, X, S, S, X, X, X, X, X, S, R, X, R, X, S, X],
    /* Water    */ [X, S, R, X, R, X, X, X, S, X, X, X, S, X, R, X, X, X],
    /* Electric */ [X, X, S, R, R, X, X, X, I, S, X, X, X, X, R, X, X, X],
    /* Grass    */ [X, R, S, X, R, X, X, R, S, R, X, R, S, X, R, X, R, X],
    /* Ice      */ [X, R, R, X, S, R, X, X, S, S, X, X, X, X, S, X, R, X],
    /* Fighting */ [S, X, X, X, X, S, X, R, X, R, R, R, S, I, X, S, S, R],
    /* Poison   */ [X, X, X, X, S, X, X, R, R, X, X, X, R, R, X, X, I, S],
    /* Ground   */ [X, S, X, S, R, X, X, S, X, I, X, R, S, X, X, X, S, X],
    /* Flying   */ [X, X, X, R, S, X, S, X, X, X, X, S, R, X, X, X, R, X],
    /* Psychic  */ [X, X, X, X, X, X, S, S, X, X, R, X, X, X, X, I, R, X],
    /* Bug      */ [X, R, X, X, S, X, R, R, X, R, S, X, X, R, X, S, R, R],
    /* Rock     */ [X, S, X, X, X, S, R, X, R, S, X, S, X, X, X, X, R, X],
    /* Ghost    */ [I, X, X, X, X, X, X, X, X, X, S, X, X, S, X, R, X, X],
    /* Dragon   */ [X, X, X, X, X, X, X, X, X, X, X, X, X, X, S, X, R, I],
    /* Dark     */ [X, X, X, X, X, X, R, X, X, X, S, X, X, S, X, R, X, R],
    /* Steel    */ [X, R, R, R, X, S, X, X, X, X, X, X, S, X, X, X, R, S],
    /* Fairy    */ [X, R, X, X, X, X, S, R, X, X, X, X, X, X, S, S, R, X],
];

/// Effectiveness of one attacking type against one defending type.
#[inline]
pub fn single_type_effectiveness(attacking: Type, defending: Type) -> f64 {
    if attacking == Type::Typeless || defending == Type::Typeless {
        return 1.0;
    }
    TYPE_CHART[attacking as usize][defending as usize]
}

/// Combined effectiveness against every distinct defending type.
///
/// Duplicate entries (a mono-type stored as `[T, T]`) only count once.
pub fn type_effectiveness(attacking: Type, defending: &[Type]) -> f64 {
    let mut multiplier = 1.0;
    for (i, &t) in defending.iter().enumerate() {
        if defending[..i].contains(&t) {
            continue;
        }
        multiplier *= single_type_effectiveness(attacking, t);
    }
    multiplier
}
