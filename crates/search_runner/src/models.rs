use poke_search::{Action, DecisionStrategy, PayoffMatrix};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SearchReport {
    pub decision: Action,
    pub strategy: DecisionStrategy,
    pub depth: u8,
    /// Number of believed states averaged into `matrix`.
    pub states: usize,
    pub duration_seconds: f64,
    pub matrix: PayoffMatrix,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct OptionsReport {
    pub user: Vec<Action>,
    pub opponent: Vec<Action>,
}
