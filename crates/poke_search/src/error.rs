use thiserror::Error;

use crate::state::SideRef;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No legal options for {0:?}")]
    NoOptions(SideRef),

    #[error("Payoff matrix has no rows")]
    EmptyPayoffMatrix,

    #[error("{side:?} cannot switch to {target}: not a living reserve")]
    InvalidSwitch { side: SideRef, target: String },

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Invalid decision strategy: {0}")]
    InvalidStrategy(String),

    #[error("Invalid damage roll mode: {0}")]
    InvalidRollMode(String),

    #[error("Equilibrium solver produced no output after {attempts} attempts")]
    EquilibriumUnavailable { attempts: u32 },

    #[error("Payoff matrix has pruned cells; an equilibrium needs every value")]
    IncompleteMatrix,

    #[error("Could not parse solver output: {0}")]
    SolverOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
