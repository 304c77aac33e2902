//! Expectiminimax over simultaneous turns.
//!
//! Every (user action, opponent action) pair is expanded into its weighted
//! branches. Each branch is applied, scored one level deeper (or by the
//! static evaluator once the depth runs out), and reversed again, so the
//! state a search is given is the state it leaves behind.
//!
//! Inner nodes are reduced to a single value by their best worst case.
//! With pruning enabled, a row stops as soon as its running worst case drops
//! below the best worst case of an earlier row; the remaining cells of that
//! row stay unknown.

pub mod cache;
pub mod evaluate;
pub mod options;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::Action;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::mutator::StateMutator;
use crate::state::{SideRef, State};
use crate::transitions::generate_instructions;

pub use cache::SearchCache;
pub use evaluate::{evaluate, WON_BATTLE};
pub use options::{get_options, side_options, STRUGGLE};

/// Root scores for every pair of options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    pub user_options: Vec<Action>,
    pub opponent_options: Vec<Action>,
    /// Row-major, one row per user option. `None` where pruning skipped
    /// the cell.
    pub values: Vec<Option<f64>>,
}

impl PayoffMatrix {
    pub fn new(user_options: Vec<Action>, opponent_options: Vec<Action>) -> Self {
        let values = vec![None; user_options.len() * opponent_options.len()];
        Self {
            user_options,
            opponent_options,
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.user_options.len()
    }

    pub fn cols(&self) -> usize {
        self.opponent_options.len()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row * self.cols() + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let cols = self.cols();
        self.values[row * cols + col] = Some(value);
    }

    pub fn row(&self, row: usize) -> &[Option<f64>] {
        let cols = self.cols();
        &self.values[row * cols..(row + 1) * cols]
    }

    /// Score of a specific pair, if it was computed.
    pub fn value_of(&self, user: &Action, opponent: &Action) -> Option<f64> {
        let row = self.user_options.iter().position(|a| a == user)?;
        let col = self.opponent_options.iter().position(|a| a == opponent)?;
        self.get(row, col)
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn row_is_complete(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_some)
    }

    /// Lowest known value in `row`.
    pub fn worst_case(&self, row: usize) -> Option<f64> {
        self.row(row).iter().flatten().copied().reduce(f64::min)
    }

    /// Best worst case over the rows. This is the value an inner node
    /// reports to its parent.
    pub fn safest_value(&self) -> f64 {
        (0..self.rows())
            .filter_map(|row| self.worst_case(row))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Lowest known value in column `col`.
    pub fn column_worst_case(&self, col: usize) -> Option<f64> {
        (0..self.rows()).filter_map(|row| self.get(row, col)).reduce(f64::min)
    }

    /// Value this matrix stands for at a pair, filling gaps conservatively.
    ///
    /// A pruned cell, or an opponent option the searched state did not have,
    /// takes the row's worst case: the opponent answers with its best known
    /// reply. A user option the state did not have takes the column's worst
    /// case.
    pub fn estimate(&self, user: &Action, opponent: &Action) -> Option<f64> {
        let row = self.user_options.iter().position(|a| a == user);
        let col = self.opponent_options.iter().position(|a| a == opponent);
        match (row, col) {
            (Some(row), Some(col)) => self.get(row, col).or_else(|| self.worst_case(row)),
            (Some(row), None) => self.worst_case(row),
            (None, Some(col)) => self.column_worst_case(col),
            (None, None) => self.values.iter().flatten().copied().reduce(f64::min),
        }
    }

    /// Cell-wise mean over matrices searched from different believed
    /// states.
    ///
    /// The result has the union of every matrix's options, in first-seen
    /// order. Every matrix contributes [`PayoffMatrix::estimate`] to every
    /// cell, so each cell averages the same samples.
    pub fn mean(matrices: &[PayoffMatrix]) -> Result<PayoffMatrix> {
        if matrices.is_empty() {
            return Err(Error::EmptyPayoffMatrix);
        }
        let user_options = union(matrices.iter().map(|m| &m.user_options));
        let opponent_options = union(matrices.iter().map(|m| &m.opponent_options));

        let mut mean = PayoffMatrix::new(user_options, opponent_options);
        for row in 0..mean.rows() {
            for col in 0..mean.cols() {
                let (user, opponent) = (&mean.user_options[row], &mean.opponent_options[col]);
                let samples: Vec<f64> = matrices.iter().filter_map(|m| m.estimate(user, opponent)).collect();
                if !samples.is_empty() {
                    let value = samples.iter().sum::<f64>() / samples.len() as f64;
                    mean.set(row, col, value);
                }
            }
        }
        Ok(mean)
    }
}

fn union<'a>(lists: impl Iterator<Item = &'a Vec<Action>>) -> Vec<Action> {
    let mut all: Vec<Action> = Vec::new();
    for action in lists.flatten() {
        if !all.contains(action) {
            all.push(action.clone());
        }
    }
    all
}

/// Score every pair of `user_options` and `opponent_options`, looking
/// `depth` turns past the first.
///
/// Options are checked before any work starts: neither list may be empty
/// and every switch must name a living reserve. The state is restored
/// before returning.
///
/// A state whose battle is already decided is not expanded. Every cell
/// holds its terminal score, and an empty option list stands for
/// [`Action::None`].
pub fn search(
    mutator: &mut StateMutator,
    user_options: &[Action],
    opponent_options: &[Action],
    depth: u8,
    prune: bool,
    config: &SearchConfig,
) -> Result<PayoffMatrix> {
    if let Some(value) = terminal_value(mutator.state, depth) {
        debug!(depth, value, "battle already over");
        let options = |list: &[Action]| {
            if list.is_empty() {
                vec![Action::None]
            } else {
                list.to_vec()
            }
        };
        let mut matrix = PayoffMatrix::new(options(user_options), options(opponent_options));
        matrix.values.fill(Some(value));
        return Ok(matrix);
    }
    validate(mutator.state, SideRef::User, user_options)?;
    validate(mutator.state, SideRef::Opponent, opponent_options)?;

    let mut searcher = Searcher {
        config,
        prune: config.pruning_enabled(prune),
        cache: SearchCache::new(),
    };
    let matrix = searcher.matrix(mutator, user_options, opponent_options, depth, true);
    debug!(
        depth,
        cached = searcher.cache.len(),
        cache_hits = searcher.cache.hits(),
        "search finished"
    );
    Ok(matrix)
}

/// Search `state` from its current options with the depth and pruning in
/// `config`.
pub fn search_state(state: &mut State, config: &SearchConfig) -> Result<PayoffMatrix> {
    let (user_options, opponent_options) = get_options(state);
    let mut mutator = StateMutator::new(state);
    search(
        &mut mutator,
        &user_options,
        &opponent_options,
        config.depth,
        config.prune,
        config,
    )
}

/// Score of a finished battle. Sooner wins and later losses score further
/// from zero.
fn terminal_value(state: &State, depth: u8) -> Option<f64> {
    let winner = state.battle_is_over()?;
    Some(evaluate(state) + f64::from(winner) * WON_BATTLE * (f64::from(depth) + 1.0))
}

fn validate(state: &State, side: SideRef, options: &[Action]) -> Result<()> {
    if options.is_empty() {
        return Err(Error::NoOptions(side));
    }
    for option in options {
        if let Action::Switch(target) = option {
            let alive = state.side(side).reserve.get(target).is_some_and(|p| p.is_alive());
            if !alive {
                return Err(Error::InvalidSwitch {
                    side,
                    target: target.clone(),
                });
            }
        }
    }
    Ok(())
}

struct Searcher<'c> {
    config: &'c SearchConfig,
    prune: bool,
    cache: SearchCache,
}

impl Searcher<'_> {
    fn matrix(
        &mut self,
        mutator: &mut StateMutator,
        user_options: &[Action],
        opponent_options: &[Action],
        depth: u8,
        root: bool,
    ) -> PayoffMatrix {
        let mut matrix = PayoffMatrix::new(user_options.to_vec(), opponent_options.to_vec());
        // Columns that cut a row are tried first in later rows
        let mut column_order: Vec<usize> = (0..opponent_options.len()).collect();
        let mut best_worst_case = f64::NEG_INFINITY;

        for (row, user) in user_options.iter().enumerate() {
            let mut worst_case = f64::INFINITY;
            for position in 0..column_order.len() {
                let col = column_order[position];
                let opponent = &opponent_options[col];
                let value = self.pair_value(mutator, user, opponent, depth);
                matrix.set(row, col, value);
                if root {
                    debug!(%user, %opponent, value, "scored root pair");
                }

                worst_case = worst_case.min(value);
                if self.prune && worst_case < best_worst_case {
                    trace!(%user, %opponent, depth, "pruned");
                    column_order.remove(position);
                    column_order.insert(0, col);
                    break;
                }
            }
            best_worst_case = best_worst_case.max(worst_case);
        }
        matrix
    }

    /// Expected value of the turn where the sides pick these actions.
    fn pair_value(&mut self, mutator: &mut StateMutator, user: &Action, opponent: &Action, depth: u8) -> f64 {
        let fingerprint = mutator.state.fingerprint();
        if let Some(value) = self.cache.get(fingerprint, depth, user, opponent) {
            trace!(%user, %opponent, depth, "cache hit");
            return value;
        }

        let branches = generate_instructions(mutator, user, opponent, self.config.damage_rolls);
        let mut value = 0.0;
        for branch in &branches {
            mutator.apply(&branch.instructions);
            value += branch.percentage * self.node_value(mutator, depth);
            mutator.reverse(&branch.instructions);
        }

        self.cache.insert(fingerprint, depth, user, opponent, value);
        value
    }

    fn node_value(&mut self, mutator: &mut StateMutator, depth: u8) -> f64 {
        let state: &State = mutator.state;
        if let Some(value) = terminal_value(state, depth) {
            return value;
        }
        if depth == 0 {
            return evaluate(state);
        }
        let (user_options, opponent_options) = get_options(state);
        self.matrix(mutator, &user_options, &opponent_options, depth - 1, false)
            .safest_value()
    }
}
