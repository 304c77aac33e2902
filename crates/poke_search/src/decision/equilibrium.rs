//! Mixed-strategy choice from a Nash equilibrium of the payoff matrix.
//!
//! The matrix is a zero-sum game: the opponent's payoff in every cell is the
//! negation of the user's. Equilibria come from an external solver; the one
//! worth the most to the user is kept and the action is sampled from the
//! user's half of it.

use std::fmt::Write as _;
use std::io::Write;
use std::process::{Command, Stdio};

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::warn;

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::search::PayoffMatrix;

/// Lines carrying an equilibrium start with this.
const EQUILIBRIUM_MARKER: &str = "NE,";

/// A pair of mixed strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct Equilibrium {
    /// Probability per user option, in row order.
    pub user: Vec<f64>,
    /// Probability per opponent option, in column order.
    pub opponent: Vec<f64>,
}

impl Equilibrium {
    /// Expected payoff to the user when both sides play this equilibrium.
    pub fn value(&self, matrix: &PayoffMatrix) -> f64 {
        let mut value = 0.0;
        for (row, p) in self.user.iter().enumerate() {
            for (col, q) in self.opponent.iter().enumerate() {
                value += p * q * matrix.get(row, col).unwrap_or(0.0);
            }
        }
        value
    }

    /// Draw a user option index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        let dist = WeightedIndex::new(&self.user)
            .map_err(|e| Error::SolverOutput(format!("unusable user strategy: {e}")))?;
        Ok(dist.sample(rng))
    }
}

/// Something that can find the equilibria of a two-player zero-sum game.
pub trait NashSolver {
    fn solve(&self, matrix: &PayoffMatrix) -> Result<Vec<Equilibrium>>;
}

/// Runs a Gambit command-line solver (`gambit-lcp` by default) as a child
/// process, feeding it the game on stdin.
#[derive(Clone, Debug)]
pub struct GambitSolver {
    config: SolverConfig,
}

impl GambitSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    fn run_once(&self, game: &str) -> Result<String> {
        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(game.as_bytes())?;
        }
        let output = child.wait_with_output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GambitSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl NashSolver for GambitSolver {
    fn solve(&self, matrix: &PayoffMatrix) -> Result<Vec<Equilibrium>> {
        let game = to_nfg(matrix)?;
        for attempt in 1..=self.config.attempts {
            let output = self.run_once(&game)?;
            let equilibria = parse_equilibria(&output, matrix.rows(), matrix.cols())?;
            if !equilibria.is_empty() {
                return Ok(equilibria);
            }
            warn!(attempt, command = %self.config.command, "equilibrium solver returned nothing");
        }
        Err(Error::EquilibriumUnavailable {
            attempts: self.config.attempts,
        })
    }
}

/// Gambit strategic-form text for the zero-sum game in `matrix`.
///
/// Outcomes are listed with the user's strategy varying fastest, each as the
/// user's payoff followed by its negation.
pub fn to_nfg(matrix: &PayoffMatrix) -> Result<String> {
    if !matrix.is_complete() {
        return Err(Error::IncompleteMatrix);
    }
    let mut game = format!(
        "NFG 1 R \"poke_search\" {{ \"user\" \"opponent\" }} {{ {} {} }}\n\n",
        matrix.rows(),
        matrix.cols()
    );
    for col in 0..matrix.cols() {
        for row in 0..matrix.rows() {
            let value = matrix.get(row, col).unwrap_or(0.0);
            let _ = write!(game, "{} {} ", value, -value);
        }
    }
    game.push('\n');
    Ok(game)
}

/// Every equilibrium line in solver output. Values may be decimals or
/// `a/b` fractions.
pub fn parse_equilibria(output: &str, rows: usize, cols: usize) -> Result<Vec<Equilibrium>> {
    let mut equilibria = Vec::new();
    for line in output.lines() {
        let Some(body) = line.trim().strip_prefix(EQUILIBRIUM_MARKER) else {
            continue;
        };
        let values = body.split(',').map(parse_value).collect::<Result<Vec<f64>>>()?;
        if values.len() != rows + cols {
            return Err(Error::SolverOutput(format!(
                "expected {} probabilities, got {}: {line}",
                rows + cols,
                values.len()
            )));
        }
        let (user, opponent) = values.split_at(rows);
        equilibria.push(Equilibrium {
            user: user.to_vec(),
            opponent: opponent.to_vec(),
        });
    }
    Ok(equilibria)
}

fn parse_value(s: &str) -> Result<f64> {
    let s = s.trim();
    let invalid = || Error::SolverOutput(format!("not a probability: {s:?}"));
    match s.split_once('/') {
        Some((numerator, denominator)) => {
            let n: f64 = numerator.trim().parse().map_err(|_| invalid())?;
            let d: f64 = denominator.trim().parse().map_err(|_| invalid())?;
            if d == 0.0 {
                return Err(invalid());
            }
            Ok(n / d)
        }
        None => s.parse().map_err(|_| invalid()),
    }
}

/// The user option to play, sampled from the equilibrium with the highest
/// value to the user.
pub fn equilibrium<S, R>(matrix: &PayoffMatrix, solver: &S, rng: &mut R) -> Result<usize>
where
    S: NashSolver + ?Sized,
    R: Rng + ?Sized,
{
    let equilibria = solver.solve(matrix)?;
    let best = equilibria
        .iter()
        .map(|e| (e, e.value(matrix)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(e, _)| e)
        .ok_or(Error::EquilibriumUnavailable { attempts: 0 })?;
    best.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn matrix(values: &[&[f64]]) -> PayoffMatrix {
        let rows = (0..values.len()).map(|i| Action::Move(format!("u{i}"))).collect();
        let cols = (0..values[0].len()).map(|j| Action::Move(format!("o{j}"))).collect();
        let mut m = PayoffMatrix::new(rows, cols);
        for (i, row) in values.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                m.set(i, j, *v);
            }
        }
        m
    }

    struct Fixed(Vec<Equilibrium>);

    impl NashSolver for Fixed {
        fn solve(&self, _: &PayoffMatrix) -> Result<Vec<Equilibrium>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_nfg_lists_user_strategy_fastest() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let game = to_nfg(&m).unwrap();
        assert!(game.starts_with("NFG 1 R \"poke_search\" { \"user\" \"opponent\" } { 2 2 }"));
        assert!(game.contains("1 -1 3 -3 2 -2 4 -4"));
    }

    #[test]
    fn test_nfg_rejects_pruned_cells() {
        let mut m = matrix(&[&[1.0, 2.0]]);
        m.values[1] = None;
        assert!(matches!(to_nfg(&m), Err(Error::IncompleteMatrix)));
    }

    #[test]
    fn test_parse_decimal_and_fraction_lines() {
        let output = "Compiling\nNE,0.5000,0.5000,1.0000,0.0000\nNE,1/3,2/3,1,0\n";
        let equilibria = parse_equilibria(output, 2, 2).unwrap();
        assert_eq!(equilibria.len(), 2);
        assert_eq!(equilibria[0].user, vec![0.5, 0.5]);
        assert_eq!(equilibria[0].opponent, vec![1.0, 0.0]);
        assert!((equilibria[1].user[0] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse_equilibria("NE,1,0,1\n", 2, 2).is_err());
        assert!(parse_equilibria("NE,1,x,1,0\n", 2, 2).is_err());
        assert!(parse_equilibria("", 2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_best_equilibrium_is_played() {
        let m = matrix(&[&[10.0, 0.0], &[0.0, 1.0]]);
        let solver = Fixed(vec![
            Equilibrium {
                user: vec![0.0, 1.0],
                opponent: vec![0.0, 1.0],
            },
            Equilibrium {
                user: vec![1.0, 0.0],
                opponent: vec![1.0, 0.0],
            },
        ]);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(equilibrium(&m, &solver, &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn test_sampling_follows_the_mix() {
        let e = Equilibrium {
            user: vec![0.25, 0.75],
            opponent: vec![1.0],
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let draws = (0..4000).filter(|_| e.sample(&mut rng).unwrap() == 1).count();
        assert!((2700..3300).contains(&draws));
    }

    #[test]
    fn test_missing_solver_binary_is_an_error() {
        let solver = GambitSolver::new(SolverConfig {
            command: "definitely-not-a-gambit-binary".to_string(),
            args: Vec::new(),
            attempts: 2,
        });
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(solver.solve(&m).is_err());
    }
}
