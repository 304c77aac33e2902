//! Turning a root payoff matrix into the action to play.

pub mod equilibrium;
pub mod maximin;

use rand::Rng;
use tracing::{info, warn};

use crate::action::Action;
use crate::config::{DecisionStrategy, SearchConfig};
use crate::error::{Error, Result};
use crate::search::PayoffMatrix;

pub use equilibrium::{Equilibrium, GambitSolver, NashSolver};
pub use maximin::maximin;

/// Pick the user's action with the strategy and solver in `config`.
pub fn decide<R: Rng + ?Sized>(matrix: &PayoffMatrix, config: &SearchConfig, rng: &mut R) -> Result<Action> {
    let solver = GambitSolver::new(config.solver.clone());
    decide_with(matrix, config.strategy, &solver, rng)
}

/// Pick the user's action, solving equilibria with `solver`.
///
/// A single option is returned without solving anything, and a single
/// opponent option turns the equilibrium into a best response. Solver
/// failures fall back to maximin.
pub fn decide_with<S, R>(matrix: &PayoffMatrix, strategy: DecisionStrategy, solver: &S, rng: &mut R) -> Result<Action>
where
    S: NashSolver + ?Sized,
    R: Rng + ?Sized,
{
    if matrix.rows() == 0 || matrix.cols() == 0 {
        return Err(Error::EmptyPayoffMatrix);
    }

    let row = if matrix.rows() == 1 {
        0
    } else {
        match strategy {
            DecisionStrategy::Maximin => maximin(matrix)?,
            DecisionStrategy::Equilibrium if matrix.cols() == 1 => best_response(matrix),
            DecisionStrategy::Equilibrium => match equilibrium::equilibrium(matrix, solver, rng) {
                Ok(row) => row,
                Err(e) => {
                    warn!(error = %e, "equilibrium unavailable, falling back to maximin");
                    maximin(matrix)?
                }
            },
        }
    };

    let action = matrix.user_options[row].clone();
    info!(%action, ?strategy, "decided");
    Ok(action)
}

fn best_response(matrix: &PayoffMatrix) -> usize {
    (0..matrix.rows())
        .filter_map(|row| matrix.get(row, 0).map(|v| (row, v)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(0, |(row, _)| row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    /// Counts calls and always fails.
    #[derive(Default)]
    struct Broken {
        calls: Cell<u32>,
    }

    impl NashSolver for Broken {
        fn solve(&self, _: &PayoffMatrix) -> Result<Vec<Equilibrium>> {
            self.calls.set(self.calls.get() + 1);
            Err(Error::EquilibriumUnavailable { attempts: 5 })
        }
    }

    fn matrix(rows: &[&str], cols: &[&str], values: &[f64]) -> PayoffMatrix {
        let mut m = PayoffMatrix::new(
            rows.iter().map(|s| Action::from(*s)).collect(),
            cols.iter().map(|s| Action::from(*s)).collect(),
        );
        for (i, v) in values.iter().enumerate() {
            m.set(i / cols.len(), i % cols.len(), *v);
        }
        m
    }

    #[test]
    fn test_single_option_skips_solver() {
        let solver = Broken::default();
        let m = matrix(&["earthquake"], &["stoneedge", "aquajet"], &[1.0, 2.0]);
        let mut rng = SmallRng::seed_from_u64(0);
        let action = decide_with(&m, DecisionStrategy::Equilibrium, &solver, &mut rng).unwrap();
        assert_eq!(action, Action::from("earthquake"));
        assert_eq!(solver.calls.get(), 0);

        let m = matrix(&["earthquake", "swordsdance"], &["stoneedge"], &[1.0, 2.0]);
        let action = decide_with(&m, DecisionStrategy::Equilibrium, &solver, &mut rng).unwrap();
        assert_eq!(action, Action::from("swordsdance"));
        assert_eq!(solver.calls.get(), 0);
    }

    #[test]
    fn test_solver_failure_falls_back_to_maximin() {
        let solver = Broken::default();
        let m = matrix(
            &["earthquake", "swordsdance"],
            &["stoneedge", "aquajet"],
            &[5.0, -10.0, 1.0, 2.0],
        );
        let mut rng = SmallRng::seed_from_u64(0);
        let action = decide_with(&m, DecisionStrategy::Equilibrium, &solver, &mut rng).unwrap();
        assert_eq!(action, Action::from("swordsdance"));
        assert_eq!(solver.calls.get(), 1);
    }

    #[test]
    fn test_empty_matrix_is_an_error() {
        let m = PayoffMatrix::new(Vec::new(), Vec::new());
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(decide(&m, &SearchConfig::default(), &mut rng).is_err());
    }
}
