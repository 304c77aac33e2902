//! Search configuration.
//!
//! One `SearchConfig` is threaded through a search call; nothing reads
//! process-wide settings. Every field has a serde default so a partial JSON
//! file (or none at all) yields a usable config.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How damage rolls are expanded into branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageRollMode {
    /// One branch at the mean roll (0.925).
    #[default]
    Average,
    /// One branch at the lowest roll (0.85).
    Min,
    /// One branch at the highest roll (1.0).
    Max,
    /// Two branches: lowest and highest.
    MinMax,
    /// Three branches: lowest, mean, highest.
    MinMaxAverage,
    /// All sixteen rolls.
    All,
}

impl DamageRollMode {
    /// Roll multipliers in thousandths, one per branch.
    pub fn rolls(self) -> &'static [u32] {
        const ALL: [u32; 16] = [
            850, 860, 870, 880, 890, 900, 910, 920, 930, 940, 950, 960, 970, 980, 990, 1000,
        ];
        match self {
            DamageRollMode::Average => &[925],
            DamageRollMode::Min => &[850],
            DamageRollMode::Max => &[1000],
            DamageRollMode::MinMax => &[850, 1000],
            DamageRollMode::MinMaxAverage => &[850, 925, 1000],
            DamageRollMode::All => &ALL,
        }
    }
}

impl FromStr for DamageRollMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(DamageRollMode::Average),
            "min" => Ok(DamageRollMode::Min),
            "max" => Ok(DamageRollMode::Max),
            "min_max" => Ok(DamageRollMode::MinMax),
            "min_max_average" => Ok(DamageRollMode::MinMaxAverage),
            "all" => Ok(DamageRollMode::All),
            other => Err(Error::InvalidRollMode(other.to_string())),
        }
    }
}

/// How the root payoff matrix becomes a single action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStrategy {
    /// Best worst case after dropping guaranteed opponent replies.
    #[default]
    Maximin,
    /// Sample from a Nash equilibrium computed by an external solver.
    Equilibrium,
}

impl FromStr for DecisionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maximin" | "safest" => Ok(DecisionStrategy::Maximin),
            "equilibrium" | "nash" | "nash_equilibrium" => Ok(DecisionStrategy::Equilibrium),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

/// External equilibrium solver invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub command: String,
    pub args: Vec<String>,
    /// Attempts before giving up when the solver prints nothing.
    pub attempts: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            command: "gambit-lcp".to_string(),
            args: vec!["-q".to_string(), "-d".to_string(), "4".to_string()],
            attempts: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Additional turns searched after the first.
    pub depth: u8,
    /// Maximin pruning. Only honored with `DecisionStrategy::Maximin`.
    pub prune: bool,
    pub damage_rolls: DamageRollMode,
    pub strategy: DecisionStrategy,
    pub solver: SolverConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            prune: true,
            damage_rolls: DamageRollMode::default(),
            strategy: DecisionStrategy::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Whether cells may be skipped. Pruned cells have no value, which an
    /// equilibrium solver cannot work with.
    pub fn pruning_enabled(&self, prune: bool) -> bool {
        prune && self.strategy == DecisionStrategy::Maximin
    }
}
